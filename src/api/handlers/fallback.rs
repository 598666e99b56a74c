//! Handler for requests that match no route.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unmatched path with 404 `unknown endpoint`.
pub async fn unknown_endpoint_handler(uri: Uri) -> AppError {
    AppError::not_found("unknown endpoint", json!({ "path": uri.path() }))
}
