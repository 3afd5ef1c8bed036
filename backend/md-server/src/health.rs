use crate::AppState;

use md_auth::Tenant;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health summary with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let configured = |url: &str| if url.is_empty() { "unset" } else { "configured" };
    let default_urls = state.tenants.urls(Tenant::Default);

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "gate": state.gate.verifier_name(),
            "default_api": configured(&default_urls.api_base_url),
            "default_ae": configured(&default_urls.ae_base_url),
            "marketing_api": configured(&state.proxy.marketing_api_url),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe; not ready until the default tenant has an API origin
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.tenants.resolve_base_url(None).is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "Default tenant API origin not configured",
        )
            .into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
