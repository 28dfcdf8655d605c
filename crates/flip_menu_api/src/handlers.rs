//! HTTP request handlers
//!
//! Handlers are thin: they call the [`ShopResolver`](flip_menu_core::ShopResolver)
//! and wrap the result in an [`ApiEnvelope`]. The gateway has already run by
//! the time any handler in this module executes, except for
//! [`health_check`] and [`metrics`], which sit outside the API namespace.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use flip_menu_core::{MenuItem, Shop, ShopComplete, ShopId};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::models::envelope::{
    ApiEnvelope, API_KEY_VALID_MESSAGE, NO_MENU_ITEMS_MESSAGE, NO_SHOPS_MESSAGE,
};
use crate::AppState;

/// GET /flip-menu/v1/shops
///
/// All shops, newest first.
pub async fn list_shops(
    State(state): State<AppState>,
) -> Result<Json<ApiEnvelope<Vec<Shop>>>, ApiError> {
    let shops = state.resolver.list_shops().await?;
    Ok(Json(ApiEnvelope::collection(shops, NO_SHOPS_MESSAGE)))
}

/// GET /flip-menu/v1/shops/:id
pub async fn get_shop(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiEnvelope<Shop>>, ApiError> {
    let shop = state.resolver.get_shop(ShopId::new(id)).await?;
    Ok(Json(ApiEnvelope::data(shop)))
}

/// GET /flip-menu/v1/shops/:id/menu
///
/// Menu items in page order. An unknown shop yields an empty menu rather
/// than a 404.
pub async fn get_shop_menu(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiEnvelope<Vec<MenuItem>>>, ApiError> {
    let items = state.resolver.get_shop_menu(ShopId::new(id)).await?;
    Ok(Json(ApiEnvelope::collection(items, NO_MENU_ITEMS_MESSAGE)))
}

/// GET /flip-menu/v1/shops/:id/complete
pub async fn get_shop_complete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ApiEnvelope<ShopComplete>>, ApiError> {
    let complete = state.resolver.get_shop_complete(ShopId::new(id)).await?;
    Ok(Json(ApiEnvelope::data(complete)))
}

/// GET /flip-menu/v1/verify
///
/// Reaching this handler means the gateway admitted the caller.
pub async fn verify_api_key() -> Json<ApiEnvelope<()>> {
    Json(ApiEnvelope::message(API_KEY_VALID_MESSAGE))
}

/// GET /health
///
/// Health check endpoint. Reports unhealthy when the settings cannot be
/// read, since every API request depends on them.
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthCheckResponse>) {
    let (status, label, error) = match state.settings.api_settings().await {
        Ok(_) => (StatusCode::OK, "healthy", None),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unhealthy",
                Some("Settings unavailable".to_string()),
            )
        }
    };

    (
        status,
        Json(HealthCheckResponse {
            status: label.to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
            error,
        }),
    )
}

/// GET /metrics
///
/// Prometheus text exposition. 404 when no metrics backend is installed.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics.render() {
        Some(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (RFC 3339)
    pub timestamp: String,

    /// Error message (if unhealthy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
