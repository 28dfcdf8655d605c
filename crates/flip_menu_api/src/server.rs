//! HTTP server configuration and startup
//!
//! This module provides the main server configuration and startup logic.
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `API_HOST` | `0.0.0.0` |
//! | `API_PORT` | `8080` |
//! | `FLIP_MENU_SETTINGS` | `flip-menu.toml` |
//! | `FLIP_MENU_CATALOG` | `flip-menu-catalog.json` |

use anyhow::Context;
use axum::Router;
use flip_menu_core::JsonCatalogStore;
use settings_manager::FileSettingsProvider;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::{routes, AppState, PrometheusApiMetrics, DEFAULT_PORT};

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default settings file
pub const DEFAULT_SETTINGS_PATH: &str = "flip-menu.toml";

/// Default catalog file
pub const DEFAULT_CATALOG_PATH: &str = "flip-menu-catalog.json";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// TOML settings file, re-read on every request
    pub settings_path: PathBuf,

    /// JSON catalog of shops and menu items
    pub catalog_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is set but is not a valid port.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("API_PORT") {
            Some(value) => value
                .parse()
                .with_context(|| format!("Invalid API_PORT: {value}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port,
            settings_path: lookup("FLIP_MENU_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or(defaults.settings_path),
            catalog_path: lookup("FLIP_MENU_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
        })
    }
}

/// API server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a new API server with the given configuration.
    pub fn new(config: ApiConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Create a server reading its settings and catalog from the files
    /// named in `config`, with Prometheus metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics cannot be registered.
    pub fn from_config(config: ApiConfig) -> anyhow::Result<Self> {
        let settings = Arc::new(FileSettingsProvider::new(&config.settings_path));
        let store = Arc::new(JsonCatalogStore::new(&config.catalog_path));
        let metrics = PrometheusApiMetrics::new(prometheus::Registry::new())
            .context("Failed to register API metrics")?;

        let state = AppState::new(settings, store).with_metrics(Arc::new(metrics));
        Ok(Self::new(config, state))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Build the Axum router with all routes and middleware.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone())
    }

    /// Start the server and listen for requests.
    ///
    /// This method blocks until the server is shut down gracefully via
    /// CTRL+C (SIGINT) or SIGTERM signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from((
            self.config
                .host
                .parse::<std::net::IpAddr>()
                .with_context(|| format!("Invalid API_HOST: {}", self.config.host))?,
            self.config.port,
        ));

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        self.serve_with_listener(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` completes.
    pub async fn serve_with_listener(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!("Starting API server on {}", addr);
        }

        let app = self.router();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Wait for shutdown signal (CTRL+C or SIGTERM)
///
/// A handler that cannot be installed is logged and never fires; the other
/// signal still shuts the server down.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
