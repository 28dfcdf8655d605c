//! Request metrics
//!
//! Counts responses by status and gateway denials by reason. The
//! [`PrometheusApiMetrics`] backend is exported in text format at `/metrics`;
//! [`NoOpApiMetrics`] is used when no backend is configured.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;

/// Recording seam for API metrics.
///
/// Implementations are shared across request tasks and must be `Send + Sync`.
pub trait ApiMetrics: Send + Sync {
    /// Record a completed response.
    fn record_response(&self, status: u16, duration_ms: u64);

    /// Record a request turned away by the gateway.
    fn record_gateway_denial(&self, reason: &str);

    /// Text exposition of everything recorded so far, if the backend has one.
    fn render(&self) -> Option<String>;
}

/// Prometheus metrics for the API.
///
/// # Metrics
/// - `flip_menu_api_responses_total{status}` (Counter)
/// - `flip_menu_api_response_duration_seconds` (Histogram)
/// - `flip_menu_api_gateway_denials_total{reason}` (Counter)
pub struct PrometheusApiMetrics {
    registry: Registry,
    responses: IntCounterVec,
    response_duration: Histogram,
    gateway_denials: IntCounterVec,
}

impl PrometheusApiMetrics {
    /// Register the API metrics with `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric with the same name is already registered.
    pub fn new(registry: Registry) -> prometheus::Result<Self> {
        let responses = IntCounterVec::new(
            Opts::new("flip_menu_api_responses_total", "Responses sent, by status code"),
            &["status"],
        )?;
        let response_duration = Histogram::with_opts(HistogramOpts::new(
            "flip_menu_api_response_duration_seconds",
            "Time from request received to response produced",
        ))?;
        let gateway_denials = IntCounterVec::new(
            Opts::new(
                "flip_menu_api_gateway_denials_total",
                "Requests denied by the access gateway, by reason",
            ),
            &["reason"],
        )?;

        registry.register(Box::new(responses.clone()))?;
        registry.register(Box::new(response_duration.clone()))?;
        registry.register(Box::new(gateway_denials.clone()))?;

        Ok(Self {
            registry,
            responses,
            response_duration,
            gateway_denials,
        })
    }
}

impl ApiMetrics for PrometheusApiMetrics {
    fn record_response(&self, status: u16, duration_ms: u64) {
        let status = status.to_string();
        self.responses.with_label_values(&[status.as_str()]).inc();
        self.response_duration.observe(duration_ms as f64 / 1000.0);
    }

    fn record_gateway_denial(&self, reason: &str) {
        self.gateway_denials.with_label_values(&[reason]).inc();
    }

    fn render(&self) -> Option<String> {
        let mut buffer = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buffer) {
            tracing::warn!("Failed to encode metrics: {}", e);
            return None;
        }
        String::from_utf8(buffer).ok()
    }
}

/// Metrics backend that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpApiMetrics;

impl NoOpApiMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl ApiMetrics for NoOpApiMetrics {
    fn record_response(&self, _status: u16, _duration_ms: u64) {}
    fn record_gateway_denial(&self, _reason: &str) {}
    fn render(&self) -> Option<String> {
        None
    }
}
