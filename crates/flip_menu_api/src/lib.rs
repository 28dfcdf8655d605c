//! Flip Menu REST API
//!
//! This crate exposes shops and their menu pages as a versioned, read-only
//! JSON API consumed by the embeddable flip menu widget.
//!
//! # Architecture
//!
//! Every request flows through the same pipeline:
//!
//! ```text
//! request -> CORS policy -> route match -> shop id guard -> gateway
//!         -> handler (resolver) -> envelope -> CORS headers -> client
//! ```
//!
//! - [`cors`]: origin matching and CORS header decisions
//! - [`gateway`]: enabled flag and API key authorization
//! - [`handlers`]: resolver calls shaped into [`models::envelope::ApiEnvelope`]
//! - [`routes`]: the route table; every API route sits behind the gateway
//!
//! Settings are read from the [`SettingsProvider`] on every request and the
//! crate never writes shop data. Business logic lives in `flip_menu_core`;
//! the dependency flows HTTP API -> business logic, never the reverse.

pub mod cors;
pub mod errors;
pub mod gateway;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use flip_menu_core::{ShopResolver, ShopStore};
use settings_manager::SettingsProvider;

// Re-export key types for convenience
pub use errors::ApiError;
pub use metrics::{ApiMetrics, NoOpApiMetrics, PrometheusApiMetrics};
pub use models::envelope::ApiEnvelope;
pub use routes::{create_router, API_BASE_PATH};
pub use server::{ApiConfig, ApiServer};

/// API version
pub const API_VERSION: &str = "v1";

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Source of the API settings, consulted on every request
    pub settings: Arc<dyn SettingsProvider>,

    /// Read queries over the shop store
    pub resolver: ShopResolver,

    /// Request and gateway counters
    pub metrics: Arc<dyn ApiMetrics>,
}

impl AppState {
    /// Create application state over a settings provider and a shop store.
    ///
    /// Metrics are not recorded until [`AppState::with_metrics`] installs a
    /// backend.
    pub fn new(settings: Arc<dyn SettingsProvider>, store: Arc<dyn ShopStore>) -> Self {
        Self {
            settings,
            resolver: ShopResolver::new(store),
            metrics: Arc::new(NoOpApiMetrics::new()),
        }
    }

    /// Replace the metrics backend
    pub fn with_metrics(mut self, metrics: Arc<dyn ApiMetrics>) -> Self {
        self.metrics = metrics;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
