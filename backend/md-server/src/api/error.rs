//! REST API error types
//!
//! Every failure under `/api` is rendered as `{"error": {"code", "message"}}`
//! with a matching HTTP status.

use crate::Upstream;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "UPSTREAM_TIMEOUT")
    pub code: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session token on a request that needs one (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Proxied path that would climb out of the upstream prefix (400)
    #[error("Invalid path: {message} {location}")]
    InvalidPath {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown API route (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The tenant's backend origin is not configured (502)
    #[error("Upstream {upstream} not configured {location}")]
    UpstreamNotConfigured {
        upstream: Upstream,
        location: ErrorLocation,
    },

    /// Transport failure talking to the backend (502)
    #[error("Upstream {upstream} unavailable: {message} {location}")]
    UpstreamUnavailable {
        upstream: Upstream,
        message: String,
        location: ErrorLocation,
    },

    /// Backend did not answer within `backends.timeout_secs` (504)
    #[error("Upstream {upstream} timed out {location}")]
    UpstreamTimeout {
        upstream: Upstream,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_path(message: impl Into<String>) -> Self {
        ApiError::InvalidPath {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream_not_configured(upstream: Upstream) -> Self {
        ApiError::UpstreamNotConfigured {
            upstream,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream_timeout(upstream: Upstream) -> Self {
        ApiError::UpstreamTimeout {
            upstream,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a reqwest failure; timeouts map to 504, the rest to 502
    #[track_caller]
    pub fn from_upstream(upstream: Upstream, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::upstream_timeout(upstream);
        }
        ApiError::UpstreamUnavailable {
            upstream,
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::UpstreamNotConfigured { .. } | ApiError::UpstreamUnavailable { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ApiError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::InvalidPath { .. } => "INVALID_PATH",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::UpstreamNotConfigured { .. } => "UPSTREAM_NOT_CONFIGURED",
            ApiError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            ApiError::UpstreamTimeout { .. } => "UPSTREAM_TIMEOUT",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::InvalidPath { .. } | ApiError::NotFound { .. }
        ) {
            log::debug!("{}", self);
        } else {
            log::error!("{}", self);
        }

        let status = self.status();
        let code = self.code().to_string();
        // Transport details stay in the log
        let message = match self {
            ApiError::Unauthorized { message, .. }
            | ApiError::InvalidPath { message, .. }
            | ApiError::NotFound { message, .. } => message,
            ApiError::UpstreamNotConfigured { upstream, .. } => {
                format!("No {} backend is configured for this tenant", upstream)
            }
            ApiError::UpstreamUnavailable { upstream, .. } => {
                format!("The {} backend is unavailable", upstream)
            }
            ApiError::UpstreamTimeout { upstream, .. } => {
                format!("The {} backend did not respond in time", upstream)
            }
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody { code, message },
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
