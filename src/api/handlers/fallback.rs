//! Handlers for unmatched routes and methods.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers requests that match no route with a JSON 404.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        format!("Route '{method} {uri}' not found"),
        json!({ "path": uri.path() }),
    )
}

/// Answers requests to a known path with an unsupported method with a JSON 405.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        format!("HTTP method '{method}' is not supported for this endpoint"),
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
