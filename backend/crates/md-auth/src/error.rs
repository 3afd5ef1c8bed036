use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token verification timed out after {timeout_ms}ms {location}")]
    VerificationTimeout {
        timeout_ms: u128,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn verification_timeout(timeout: Duration) -> Self {
        Self::VerificationTimeout {
            timeout_ms: timeout.as_millis(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code, also used as a metrics label
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::VerificationTimeout { .. } => "VERIFICATION_TIMEOUT",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
