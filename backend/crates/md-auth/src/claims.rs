use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Longest tenant marker accepted in the `source` claim
pub const MAX_SOURCE_LENGTH: usize = 64;

/// Session token claims. Fields the dashboard does not consume are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account executive id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Tenant marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Expiration timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Validate claims after the token itself has been accepted
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if let Some(ref source) = self.source
            && source.len() > MAX_SOURCE_LENGTH
        {
            return Err(AuthError::InvalidClaim {
                claim: "source".to_string(),
                message: "source exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(ref sub) = self.sub
            && sub.is_empty()
        {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty when present".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
