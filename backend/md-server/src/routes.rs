use crate::{
    AppState, UNAUTHORIZED_PATH, access_gate,
    api::not_found::api_not_found,
    health,
    metrics::metrics_handler,
    pages::{static_bundle::static_bundle, unauthorized::unauthorized_page},
    proxy_ae, proxy_marketing, proxy_mortdash,
};

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{any, get},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/mortdash/{*path}", any(proxy_mortdash))
        .route("/ae/{*path}", any(proxy_ae))
        .route("/marketing/{*path}", any(proxy_marketing))
        .fallback(api_not_found);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(metrics_handler))
        .route(UNAUTHORIZED_PATH, get(unauthorized_page))
        .nest("/api", api)
        // Everything else is the dashboard bundle
        .fallback_service(static_bundle(static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        .with_state(state)
}
