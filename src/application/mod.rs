//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a transport-agnostic API
//! for the HTTP handlers.
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening, resolution, and domain ranking

pub mod services;
