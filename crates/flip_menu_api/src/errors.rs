//! Error handling and HTTP error conversion
//!
//! Failures from the gateway, the settings provider and the resolver are
//! turned into [`ApiEnvelope`] failure bodies here, at the HTTP boundary.
//!
//! | Error | Status | Message |
//! |---|---|---|
//! | gateway `api_disabled` | 403 | API access is disabled |
//! | gateway `invalid_api_key` | 403 | Invalid API key |
//! | shop not found | 404 | Shop not found |
//! | settings or store failure | 500 | An internal error occurred |
//!
//! Internal failures never expose their detail to the caller; the detail is
//! logged server-side instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flip_menu_core::ResolveError;
use settings_manager::SettingsError;
use thiserror::Error;

use crate::gateway::GatewayDenial;
use crate::models::envelope::{ApiEnvelope, SHOP_NOT_FOUND_MESSAGE};

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Message sent to callers for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Errors a request can end with.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Gateway denied request: {0}")]
    Gateway(GatewayDenial),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Settings unavailable: {0}")]
    Settings(#[from] SettingsError),
}

impl From<GatewayDenial> for ApiError {
    fn from(denial: GatewayDenial) -> Self {
        Self::Gateway(denial)
    }
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Gateway(denial) => denial.status(),
            Self::Resolve(ResolveError::ShopNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Resolve(ResolveError::Store(_)) | Self::Settings(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable reason sent to the caller
    pub fn code(&self) -> &'static str {
        match self {
            Self::Gateway(denial) => denial.code(),
            Self::Resolve(ResolveError::ShopNotFound(_)) => "not_found",
            Self::Resolve(ResolveError::Store(_)) | Self::Settings(_) => "internal_error",
        }
    }

    /// Human-readable reason sent to the caller
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Gateway(denial) => denial.message(),
            Self::Resolve(ResolveError::ShopNotFound(_)) => SHOP_NOT_FOUND_MESSAGE,
            Self::Resolve(ResolveError::Store(_)) | Self::Settings(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log error server-side
        log_error(&self, status);

        let body = ApiEnvelope::failure(self.public_message(), self.code());
        (status, Json(body)).into_response()
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ApiError, status: StatusCode) {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR => {
            tracing::error!("API error: {} - {}", status, error);
        }
        StatusCode::NOT_FOUND => {
            tracing::warn!("API error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("API error: {} - {}", status, error);
        }
    }
}
