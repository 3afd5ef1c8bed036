use crate::{Claims, JwtValidator, Result as AuthErrorResult};

use async_trait::async_trait;

/// Decides whether a session token is currently valid.
///
/// Implementations must not panic; every rejection is an `Err`.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AuthErrorResult<Claims>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl TokenVerifier for JwtValidator {
    async fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate(token)
    }

    fn name(&self) -> &'static str {
        self.algorithm()
    }
}
