mod gate;

use crate::{AccessGate, AppState, GateScope, Metrics, ProxyConfig, SessionCookie};

use md_auth::{AuthError, BackendUrls, Claims, TenantTable, TokenVerifier};

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use serde_json::Value;

/// Verifier that accepts exactly the tokens it was built with
pub(crate) struct AllowListVerifier {
    accepted: HashSet<String>,
}

impl AllowListVerifier {
    pub(crate) fn new(accepted: &[&str]) -> Self {
        Self {
            accepted: accepted.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TokenVerifier for AllowListVerifier {
    async fn verify(&self, token: &str) -> md_auth::Result<Claims> {
        if self.accepted.contains(token) {
            Ok(Claims::default())
        } else {
            Err(AuthError::InvalidToken {
                message: "not on the allow list".into(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }

    fn name(&self) -> &'static str {
        "allow-list"
    }
}

/// Verifier that never answers within any reasonable timeout
pub(crate) struct StalledVerifier;

#[async_trait]
impl TokenVerifier for StalledVerifier {
    async fn verify(&self, _token: &str) -> md_auth::Result<Claims> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Claims::default())
    }

    fn name(&self) -> &'static str {
        "stalled"
    }
}

pub(crate) fn gate_with(verifier: impl TokenVerifier + 'static) -> AccessGate {
    AccessGate::new(
        Arc::new(verifier),
        Duration::from_millis(50),
        GateScope::default(),
        Metrics::new(),
    )
}

pub(crate) fn test_tenants() -> TenantTable {
    TenantTable::new(
        BackendUrls::new("https://api.default.test", "https://ae.default.test"),
        BackendUrls::new("https://api.wsc.test", "https://ae.wsc.test"),
        BackendUrls::new("https://api.ameritrust.test", "https://ae.ameritrust.test"),
    )
}

pub(crate) fn test_state(accepted: &[&str]) -> AppState {
    AppState {
        gate: Arc::new(gate_with(AllowListVerifier::new(accepted))),
        session_cookie: SessionCookie::new("auth_token", true),
        tenants: Arc::new(test_tenants()),
        proxy: ProxyConfig::new("", Duration::from_secs(5)),
        http_client: reqwest::Client::new(),
        metrics: Metrics::new(),
        prometheus: None,
    }
}

/// Unsigned three-part token carrying the given payload
pub(crate) fn token_with_payload(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.sig", header, body)
}
