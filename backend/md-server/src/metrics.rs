use crate::AppState;

use std::time::Duration;

use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};

/// Metrics collector for gate and proxy operations
#[derive(Debug, Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "md_server" }
    }

    /// Record the outcome of one gate evaluation
    pub fn gate_decision(&self, decision: &str) {
        counter!(format!("{}.gate.decisions", self.prefix)).increment(1);
        counter!(format!("{}.gate.decisions.{}", self.prefix, decision)).increment(1);
    }

    /// Record a token the verifier refused
    pub fn token_rejected(&self, reason: &str) {
        counter!(format!("{}.gate.tokens_rejected", self.prefix)).increment(1);
        counter!(format!("{}.gate.tokens_rejected.{}", self.prefix, reason)).increment(1);
    }

    pub fn proxy_request(&self, upstream: &str, tenant: &str) {
        counter!(format!("{}.proxy.requests", self.prefix)).increment(1);
        counter!(format!("{}.proxy.requests.{}.{}", self.prefix, upstream, tenant)).increment(1);
    }

    /// Record an upstream response by status class (2xx, 4xx, ...)
    pub fn proxy_response(&self, upstream: &str, status: u16) {
        counter!(format!(
            "{}.proxy.responses.{}.{}xx",
            self.prefix,
            upstream,
            status / 100
        ))
        .increment(1);
    }

    pub fn proxy_failure(&self, upstream: &str, code: &str) {
        counter!(format!("{}.proxy.failures", self.prefix)).increment(1);
        counter!(format!("{}.proxy.failures.{}.{}", self.prefix, upstream, code)).increment(1);
    }

    /// Record upstream round-trip latency
    pub fn proxy_latency(&self, upstream: &str, duration: Duration) {
        histogram!(format!("{}.proxy.latency_ms.{}", self.prefix, upstream))
            .record(duration.as_millis() as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(ref handle) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Metrics recorder not installed").into_response(),
    }
}
