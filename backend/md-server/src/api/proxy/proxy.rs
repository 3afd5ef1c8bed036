//! Tenant-aware pass-through to the dashboard backends

use crate::{ApiError, ApiResult, AppState, RequestContext, Upstream, query_without_token};

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{
        HeaderMap, Method,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use log::{debug, warn};
use url::Url;

/// The parts of an inbound request that are forwarded upstream
struct Outbound {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
}

/// ANY /api/mortdash/{*path}
pub async fn proxy_mortdash(
    State(state): State<AppState>,
    context: RequestContext,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let base_url = context.api_base_url.clone();
    let outbound = Outbound {
        method,
        path,
        query,
        headers,
        body,
    };
    forward(&state, Upstream::Mortdash, &base_url, &context, outbound).await
}

/// ANY /api/ae/{*path}
pub async fn proxy_ae(
    State(state): State<AppState>,
    context: RequestContext,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let base_url = context.ae_base_url.clone();
    let outbound = Outbound {
        method,
        path,
        query,
        headers,
        body,
    };
    forward(&state, Upstream::AccountExecutive, &base_url, &context, outbound).await
}

/// ANY /api/marketing/{*path}
pub async fn proxy_marketing(
    State(state): State<AppState>,
    context: RequestContext,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let base_url = state.proxy.marketing_api_url.clone();
    let outbound = Outbound {
        method,
        path,
        query,
        headers,
        body,
    };
    forward(&state, Upstream::Marketing, &base_url, &context, outbound).await
}

async fn forward(
    state: &AppState,
    upstream: Upstream,
    base_url: &str,
    context: &RequestContext,
    outbound: Outbound,
) -> ApiResult<Response> {
    let tenant = context.tenant.to_string();
    state.metrics.proxy_request(upstream.label(), &tenant);

    let result = send(state, upstream, base_url, context, outbound).await;
    if let Err(ref e) = result {
        state.metrics.proxy_failure(upstream.label(), e.code());
    }
    result
}

async fn send(
    state: &AppState,
    upstream: Upstream,
    base_url: &str,
    context: &RequestContext,
    outbound: Outbound,
) -> ApiResult<Response> {
    let Some(ref token) = context.token else {
        return Err(ApiError::unauthorized("A session token is required"));
    };

    if base_url.is_empty() {
        warn!(
            "No {} backend configured for tenant {}",
            upstream, context.tenant
        );
        return Err(ApiError::upstream_not_configured(upstream));
    }

    let url = upstream_url(upstream, base_url, &outbound.path, outbound.query.as_deref())?;
    debug!("Proxying {} {} to {}", outbound.method, upstream, url);

    let mut request = state
        .http_client
        .request(outbound.method, url)
        .timeout(state.proxy.timeout)
        .bearer_auth(token)
        .body(outbound.body);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = outbound.headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }

    let started = Instant::now();
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::from_upstream(upstream, e))?;
    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::from_upstream(upstream, e))?;
    state.metrics.proxy_latency(upstream.label(), started.elapsed());
    state.metrics.proxy_response(upstream.label(), status.as_u16());

    let mut relayed = (status, body).into_response();
    relayed.headers_mut().remove(CONTENT_TYPE);
    if let Some(value) = content_type {
        relayed.headers_mut().insert(CONTENT_TYPE, value);
    }
    Ok(relayed)
}

/// Append `path` under the base URL one segment at a time and carry over the
/// query string minus `token`. Reserved characters inside a segment stay
/// percent-encoded, so the caller's path can never reach above the base path.
pub fn upstream_url(
    upstream: Upstream,
    base_url: &str,
    path: &str,
    query: Option<&str>,
) -> ApiResult<Url> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    if segments.iter().any(|s| matches!(*s, "." | "..")) {
        return Err(ApiError::invalid_path("Relative path segments are not allowed"));
    }

    let mut url = Url::parse(base_url).map_err(|e| {
        warn!("Unparseable {} base URL {}: {}", upstream, base_url, e);
        ApiError::upstream_not_configured(upstream)
    })?;
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| ApiError::upstream_not_configured(upstream))?
        .pop_if_empty()
        .extend(segments);

    let query = query.map(query_without_token).filter(|q| !q.is_empty());
    url.set_query(query.as_deref());
    Ok(url)
}
