//! HTTP routing configuration
//!
//! # Route Structure
//!
//! The versioned API lives under `/flip-menu/v1`:
//!
//! - GET /flip-menu/v1/shops - List shops, newest first
//! - GET /flip-menu/v1/shops/:id - Single shop
//! - GET /flip-menu/v1/shops/:id/menu - Menu items in page order
//! - GET /flip-menu/v1/shops/:id/complete - Shop with its menu
//! - GET /flip-menu/v1/verify - Confirm the caller passes the gateway
//!
//! Every route in that table sits behind the same gateway layer. Two
//! operational routes sit outside the namespace and are never gated:
//!
//! - GET /health - Health check
//! - GET /metrics - Prometheus metrics

use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use std::time::Duration;
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{handlers, middleware as api_middleware, AppState};

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

/// Base path of the versioned API
pub const API_BASE_PATH: &str = "/flip-menu/v1";

/// Request timeout applied to every route
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The versioned API: route pattern and handler, all gated.
fn api_route_table() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        ("/shops", get(handlers::list_shops)),
        ("/shops/:id", get(handlers::get_shop)),
        ("/shops/:id/menu", get(handlers::get_shop_menu)),
        ("/shops/:id/complete", get(handlers::get_shop_complete)),
        ("/verify", get(handlers::verify_api_key)),
    ]
}

/// Route patterns of the versioned API, relative to [`API_BASE_PATH`]
pub fn api_route_paths() -> Vec<&'static str> {
    api_route_table().into_iter().map(|(path, _)| path).collect()
}

/// Create the complete API router with all routes configured.
///
/// This function sets up:
/// - The gated route table under [`API_BASE_PATH`]
/// - Health and metrics routes
/// - CORS on every response, including errors and unmatched routes
/// - Request tracing and a request timeout
pub fn create_router(state: AppState) -> Router {
    // Configure request tracing. Request headers are left out of the span
    // since they carry the API key.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new())
        .on_response(DefaultOnResponse::new().include_headers(true));

    let timeout_layer = TimeoutLayer::new(REQUEST_TIMEOUT);

    // The id guard is added last so it runs before the gateway: a malformed
    // id is a routing failure, not an authorization one.
    let api_v1 = api_route_table()
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router.route(path, handler)
        })
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api_middleware::gateway_middleware,
        ))
        .route_layer(middleware::from_fn(api_middleware::shop_id_guard));

    Router::new()
        .nest(API_BASE_PATH, api_v1)
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .layer(timeout_layer)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_middleware::cors_middleware,
        ))
        .layer(trace_layer)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_middleware::tracing_middleware,
        ))
        .with_state(state)
}
