//! Access gateway
//!
//! Every API route passes the same two checks, in order:
//!
//! 1. The API must be enabled, otherwise the request is denied with
//!    `api_disabled`.
//! 2. If a key is configured, the caller's key must equal it exactly,
//!    otherwise the request is denied with `invalid_api_key`. An empty stored
//!    key puts the API in public mode and any caller is admitted.
//!
//! The caller's key comes from the `X-API-Key` header, falling back to the
//! `api_key` query parameter when the header is missing or empty.

use axum::http::{HeaderMap, StatusCode, Uri};
use settings_manager::ApiSettings;

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter carrying the API key when the header is absent
pub const API_KEY_QUERY_PARAM: &str = "api_key";

/// Why the gateway turned a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayDenial {
    ApiDisabled,
    InvalidApiKey,
}

impl GatewayDenial {
    /// Machine-readable reason
    pub fn code(&self) -> &'static str {
        match self {
            Self::ApiDisabled => "api_disabled",
            Self::InvalidApiKey => "invalid_api_key",
        }
    }

    /// Human-readable reason
    pub fn message(&self) -> &'static str {
        match self {
            Self::ApiDisabled => "API access is disabled",
            Self::InvalidApiKey => "Invalid API key",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }
}

impl std::fmt::Display for GatewayDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Decide whether a request carrying `candidate` may proceed.
///
/// The comparison is exact: case-sensitive and untrimmed.
pub fn authorize(settings: &ApiSettings, candidate: Option<&str>) -> Result<(), GatewayDenial> {
    if !settings.api_enabled {
        return Err(GatewayDenial::ApiDisabled);
    }

    if settings.api_key.is_public() {
        return Ok(());
    }

    match candidate {
        Some(key) if settings.api_key.matches(key) => Ok(()),
        _ => Err(GatewayDenial::InvalidApiKey),
    }
}

/// Pull the caller's key out of the request.
///
/// A non-empty `X-API-Key` header wins; otherwise the `api_key` query
/// parameter is used, the last one when it is repeated. Header values that
/// are not visible ASCII are ignored.
pub fn extract_api_key(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    if let Some(key) = from_header {
        return Some(key.to_string());
    }

    let axum::extract::Query(pairs) =
        axum::extract::Query::<Vec<(String, String)>>::try_from_uri(uri).ok()?;

    pairs
        .into_iter()
        .rev()
        .find(|(name, _)| name == API_KEY_QUERY_PARAM)
        .map(|(_, value)| value)
}
