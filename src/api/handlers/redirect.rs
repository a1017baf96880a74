//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::api::middleware::tracing::record_code;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `302 Found` with the stored URL, unchanged, in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    record_code(&code);
    let original_url = state.shortener.resolve(&code)?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    debug!(code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
