//! Access gate for page navigations.
//!
//! The decision is an ordered sequence of guards: path, presence, validity,
//! then cookie synchronization. An invalid token therefore never reaches the
//! branches that write a cookie.

use crate::{GateDecision, GateRequest, GateScope, Metrics, is_cookie_value};

use md_auth::{AuthError, TokenVerifier};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

/// Redirect target for rejected navigations; the gate always lets it through
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Decides the fate of each in-scope page navigation
#[derive(Clone)]
pub struct AccessGate {
    verifier: Arc<dyn TokenVerifier>,
    verify_timeout: Duration,
    scope: GateScope,
    metrics: Metrics,
}

impl AccessGate {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        verify_timeout: Duration,
        scope: GateScope,
        metrics: Metrics,
    ) -> Self {
        Self {
            verifier,
            verify_timeout,
            scope,
            metrics,
        }
    }

    pub fn scope(&self) -> &GateScope {
        &self.scope
    }

    pub fn verifier_name(&self) -> &'static str {
        self.verifier.name()
    }

    pub async fn decide(&self, request: &GateRequest<'_>) -> GateDecision {
        let decision = self.evaluate(request).await;
        self.metrics.gate_decision(decision.label());
        match decision {
            GateDecision::RedirectUnauthorized
            | GateDecision::RedirectUnauthorizedAndClearCookie => {
                warn!("Gate denied {}: {}", request.path, decision.label())
            }
            _ => debug!("Gate {} -> {}", request.path, decision.label()),
        }
        decision
    }

    async fn evaluate(&self, request: &GateRequest<'_>) -> GateDecision {
        if request.path == UNAUTHORIZED_PATH {
            return GateDecision::Allow;
        }

        let Some(token) = request.url_token.or(request.cookie_token) else {
            return GateDecision::RedirectUnauthorized;
        };

        if !self.is_valid_token(token).await {
            return if request.cookie_token.is_some() {
                GateDecision::RedirectUnauthorizedAndClearCookie
            } else {
                GateDecision::RedirectUnauthorized
            };
        }

        match (request.url_token, request.cookie_token) {
            (None, Some(cookie)) => GateDecision::RedirectWithToken {
                token: cookie.to_string(),
            },
            (Some(url), cookie) if cookie != Some(url) => GateDecision::AllowAndSetCookie {
                token: url.to_string(),
            },
            _ => GateDecision::Allow,
        }
    }

    /// Any verifier error, and running past the timeout, count as invalid.
    /// So does a token that could not be stored verbatim in the session cookie.
    pub async fn is_valid_token(&self, token: &str) -> bool {
        if !is_cookie_value(token) {
            warn!("Token rejected: not a valid cookie value");
            self.metrics.token_rejected("MALFORMED_TOKEN");
            return false;
        }
        match tokio::time::timeout(self.verify_timeout, self.verifier.verify(token)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!("Token rejected by {} verifier: {}", self.verifier.name(), e);
                self.metrics.token_rejected(e.error_code());
                false
            }
            Err(_) => {
                let e = AuthError::verification_timeout(self.verify_timeout);
                warn!("{}", e);
                self.metrics.token_rejected(e.error_code());
                false
            }
        }
    }
}
