use crate::{AccessGate, Metrics, ProxyConfig, SessionCookie};

use md_auth::{BackendUrls, TenantTable};
use md_config::{TenantUrlsConfig, TenantsConfig};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared, read-only state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AccessGate>,
    pub session_cookie: SessionCookie,
    pub tenants: Arc<TenantTable>,
    pub proxy: ProxyConfig,
    pub http_client: reqwest::Client,
    pub metrics: Metrics,
    /// `None` when no Prometheus recorder is installed (tests)
    pub prometheus: Option<PrometheusHandle>,
}

/// Convert configured tenant origins into the resolver's table
pub fn tenant_table_from_config(config: &TenantsConfig) -> TenantTable {
    TenantTable::new(
        backend_urls(&config.default),
        backend_urls(&config.wsc),
        backend_urls(&config.ameritrust),
    )
}

fn backend_urls(config: &TenantUrlsConfig) -> BackendUrls {
    BackendUrls::new(config.api_base_url.clone(), config.ae_base_url.clone())
}
