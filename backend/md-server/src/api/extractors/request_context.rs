//! Per-request tenant resolution for API handlers

use crate::{AppState, SessionCookie};

use md_auth::{Tenant, TenantTable, extract_tenant_marker};

use std::convert::Infallible;
use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Token, tenant and backend origins resolved for one request.
///
/// Never rejects: a request without a usable token resolves to the default
/// tenant, and handlers decide whether a missing token is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub token: Option<String>,
    pub marker: Option<String>,
    pub tenant: Tenant,
    pub api_base_url: String,
    pub ae_base_url: String,
}

impl RequestContext {
    pub fn from_parts(parts: &Parts, session_cookie: &SessionCookie, tenants: &TenantTable) -> Self {
        let token = request_token(parts, session_cookie);
        let marker = token.as_deref().and_then(extract_tenant_marker);
        let tenant = Tenant::from_marker(marker.as_deref());
        let urls = tenants.urls(tenant);

        Self {
            token,
            marker,
            tenant,
            api_base_url: urls.api_base_url.clone(),
            ae_base_url: urls.ae_base_url.clone(),
        }
    }
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let context = RequestContext::from_parts(parts, &state.session_cookie, &state.tenants);
            log::debug!(
                "Resolved tenant {} for {}",
                context.tenant,
                parts.uri.path()
            );
            Ok(context)
        }
    }
}

/// Session token for a request: `token` query parameter, then the session
/// cookie, then an `Authorization: Bearer` header
pub fn request_token(parts: &Parts, session_cookie: &SessionCookie) -> Option<String> {
    SessionCookie::url_token(&parts.uri)
        .or_else(|| session_cookie.get_session_token(&parts.headers))
        .or_else(|| bearer_token(&parts.headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// General API origin for the request's tenant
pub fn resolve_base_url_from_request(parts: &Parts, state: &AppState) -> String {
    let token = request_token(parts, &state.session_cookie);
    let marker = token.as_deref().and_then(extract_tenant_marker);
    state.tenants.resolve_base_url(marker.as_deref()).to_string()
}

/// Account-executive API origin for the request's tenant
pub fn resolve_ae_url_from_request(parts: &Parts, state: &AppState) -> String {
    let token = request_token(parts, &state.session_cookie);
    let marker = token.as_deref().and_then(extract_tenant_marker);
    state.tenants.resolve_ae_url(marker.as_deref()).to_string()
}
