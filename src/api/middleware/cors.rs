//! Cross-origin resource sharing policy.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows browser clients on any origin to call the API.
///
/// `Location` is exposed so scripts can read redirect targets.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([header::LOCATION])
}
