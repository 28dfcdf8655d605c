//! Request middleware
//!
//! The API pipeline is assembled from these layers (outermost first):
//!
//! 1. [`tracing_middleware`]: request id, start/finish logs, response metrics
//! 2. [`cors_middleware`]: loads settings, answers preflights, adds CORS headers
//! 3. [`shop_id_guard`]: rejects non-numeric `:id` segments as not found
//! 4. [`gateway_middleware`]: enabled flag and API key check
//!
//! Settings are loaded once per request by the CORS layer and handed to the
//! gateway through the request extensions.

use axum::{
    extract::{RawPathParams, Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use settings_manager::ApiSettings;
use std::time::Instant;

use crate::cors::CorsDecision;
use crate::errors::ApiError;
use crate::gateway;
use crate::routes::API_BASE_PATH;
use crate::AppState;

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Path parameter validated by [`shop_id_guard`]
const SHOP_ID_PARAM: &str = "id";

/// CORS middleware.
///
/// Reads the settings fresh for this request, decides the CORS headers and
/// applies them to whatever response comes back, success or failure.
/// `OPTIONS` requests are answered here with an empty 200 and never reach
/// routing, the gateway or a handler.
///
/// When the settings cannot be read, API requests end with a 500 envelope.
/// Operational routes outside the API namespace are still served, without
/// CORS headers.
pub async fn cors_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let settings = match state.settings.api_settings().await {
        Ok(settings) => settings,
        Err(e) if is_operational(&request) => {
            tracing::warn!(
                path = %request.uri().path(),
                error = %e,
                "Settings unavailable, serving without CORS headers"
            );
            return next.run(request).await;
        }
        Err(e) => return ApiError::from(e).into_response(),
    };

    let decision = CorsDecision::evaluate(&settings, request.headers().get(header::ORIGIN));

    let mut response = if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "Answering preflight request");
        StatusCode::OK.into_response()
    } else {
        request.extensions_mut().insert(settings);
        next.run(request).await
    };

    decision.apply(response.headers_mut());
    response
}

/// Requests outside the versioned API, such as `/health` and `/metrics`.
/// These report on the service itself and must stay reachable when the
/// settings cannot be read.
fn is_operational(request: &Request) -> bool {
    request.method() != Method::OPTIONS && !request.uri().path().starts_with(API_BASE_PATH)
}

/// Shop id guard.
///
/// Route parameters named `id` must be a decimal number that fits a shop id.
/// Anything else is answered with a bare 404, the same as an unmatched
/// route, before the gateway runs.
pub async fn shop_id_guard(
    params: Option<RawPathParams>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(params) = params {
        for (name, value) in params.iter() {
            if name == SHOP_ID_PARAM && !is_shop_id(value) {
                tracing::debug!(id = value, "Rejecting non-numeric shop id");
                return StatusCode::NOT_FOUND.into_response();
            }
        }
    }

    next.run(request).await
}

fn is_shop_id(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<u64>().is_ok()
}

/// Access gateway middleware.
///
/// Applies [`gateway::authorize`] to every request it wraps. Denials end the
/// request with a 403 envelope.
pub async fn gateway_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let settings = match request.extensions().get::<ApiSettings>() {
        Some(settings) => settings.clone(),
        None => state.settings.api_settings().await?,
    };

    let candidate = gateway::extract_api_key(request.headers(), request.uri());

    if let Err(denial) = gateway::authorize(&settings, candidate.as_deref()) {
        tracing::warn!(
            reason = denial.code(),
            path = %request.uri().path(),
            key_supplied = candidate.is_some(),
            "Gateway denied request"
        );
        state.metrics.record_gateway_denial(denial.code());
        return Err(denial.into());
    }

    Ok(next.run(request).await)
}

/// Request tracing middleware.
///
/// Adds a request id to the logs and the response headers, and records the
/// response in the metrics. Only the path is logged; the query string may
/// carry the API key.
pub async fn tracing_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Generate request ID
    let request_id = uuid::Uuid::new_v4().to_string();
    let started = Instant::now();

    // Log request start
    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Request started"
    );

    let mut response = next.run(request).await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    state
        .metrics
        .record_response(response.status().as_u16(), duration_ms);

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        duration_ms,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
