#![allow(dead_code)]

//! Test infrastructure for md-server integration tests


use md_auth::{BackendUrls, JwtValidator, TenantTable};
use md_server::{
    AccessGate, AppState, GateScope, Metrics, ProxyConfig, SessionCookie, build_router,
};

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use tempfile::TempDir;

/// Default JWT secret for all tests (HS256 requires at least 32 bytes)
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// Body of the dashboard shell written into the temporary bundle directory
pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>dashboard shell</body></html>";

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestAppConfig {
    pub tenants: TenantTable,
    pub marketing_api_url: String,
    pub proxy_timeout: Duration,
    pub secure_cookie: bool,
}

impl Default for TestAppConfig {
    fn default() -> Self {
        Self {
            tenants: TenantTable::new(
                BackendUrls::new("https://api.default.test", "https://ae.default.test"),
                BackendUrls::new("https://api.wsc.test", "https://ae.wsc.test"),
                BackendUrls::new("https://api.ameritrust.test", "https://ae.ameritrust.test"),
            ),
            marketing_api_url: String::new(),
            proxy_timeout: Duration::from_secs(5),
            secure_cookie: true,
        }
    }
}

impl TestAppConfig {
    /// Route every tenant's API and AE origin to one place per tenant
    pub fn with_tenant_origins(default: &str, wsc: &str, ameritrust: &str) -> Self {
        Self {
            tenants: TenantTable::new(
                BackendUrls::new(default, default),
                BackendUrls::new(wsc, wsc),
                BackendUrls::new(ameritrust, ameritrust),
            ),
            ..Default::default()
        }
    }
}

/// Test server plus the bundle directory it serves (dropped with the server)
pub struct TestApp {
    pub server: TestServer,
    pub static_dir: TempDir,
}

/// Create a TestServer with default configuration
pub fn create_test_app() -> TestApp {
    create_test_app_with_config(TestAppConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_app_with_config(config: TestAppConfig) -> TestApp {
    let static_dir = TempDir::new().expect("Failed to create static dir");
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
        .expect("Failed to write index.html");
    std::fs::write(static_dir.path().join("favicon.ico"), b"icon")
        .expect("Failed to write favicon.ico");

    let metrics = Metrics::new();
    let gate = AccessGate::new(
        Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)),
        Duration::from_millis(500),
        GateScope::default(),
        metrics.clone(),
    );

    let app_state = AppState {
        gate: Arc::new(gate),
        session_cookie: SessionCookie::new("auth_token", config.secure_cookie),
        tenants: Arc::new(config.tenants),
        proxy: ProxyConfig::new(config.marketing_api_url, config.proxy_timeout),
        http_client: reqwest::Client::new(),
        metrics,
        prometheus: None,
    };

    let app = build_router(app_state, static_dir.path());
    let server = TestServer::builder()
        .build(app)
        .expect("Failed to create test server");

    TestApp { server, static_dir }
}
