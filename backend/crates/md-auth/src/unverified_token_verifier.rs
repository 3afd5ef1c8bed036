use crate::{AuthError, Claims, Result as AuthErrorResult, TokenVerifier, decode_payload};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Development-only verifier: checks token shape and expiry, never the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnverifiedTokenVerifier;

impl UnverifiedTokenVerifier {
    #[track_caller]
    pub fn inspect(&self, token: &str) -> AuthErrorResult<Claims> {
        let payload = decode_payload(token)?;

        let claims: Claims =
            serde_json::from_value(payload).map_err(|e| AuthError::InvalidToken {
                message: format!("unexpected claim types: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(exp) = claims.exp
            && exp < chrono::Utc::now().timestamp()
        {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        claims.validate()?;

        Ok(claims)
    }
}

#[async_trait]
impl TokenVerifier for UnverifiedTokenVerifier {
    async fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        self.inspect(token)
    }

    fn name(&self) -> &'static str {
        "unverified"
    }
}
