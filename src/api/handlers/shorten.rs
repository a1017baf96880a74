//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// Idempotent: submitting the same URL again returns the same short URL.
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "originalUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
///   "shortUrl": "http://localhost:8080/aB3cD4e"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or the URL is
/// blank, malformed, or lacks a scheme or host.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;

    let short_url = state.shortener.shorten(&payload.url)?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            original_url: payload.url,
            short_url,
        }),
    ))
}
