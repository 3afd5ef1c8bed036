use crate::ApiError;

use axum::http::Uri;

/// Fallback for unknown `/api` routes, so they never reach the dashboard bundle
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No API route for {}", uri.path()))
}
