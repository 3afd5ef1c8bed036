pub mod api;
pub mod app_state;
pub mod error;
pub mod gate;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod pages;
pub mod routes;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::request_context::{
        RequestContext, request_token, resolve_ae_url_from_request, resolve_base_url_from_request,
    },
    proxy::{
        proxy::{proxy_ae, proxy_marketing, proxy_mortdash},
        proxy_config::ProxyConfig,
        upstream::Upstream,
    },
};
pub use app_state::{AppState, tenant_table_from_config};
pub use error::{Result as ServerResult, ServerError};
pub use gate::{
    access_gate::{AccessGate, UNAUTHORIZED_PATH},
    gate_decision::GateDecision,
    gate_request::GateRequest,
    gate_scope::GateScope,
    middleware::{access_gate, location_with_token},
};
pub use crate::metrics::Metrics;
pub use session::session_cookie::{
    SessionCookie, TOKEN_QUERY_PARAM, is_cookie_value, query_without_token,
};

pub use crate::routes::build_router;
