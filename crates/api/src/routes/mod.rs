//! Route handlers.

pub mod dashboard;
pub mod health;
pub mod prometheus;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
