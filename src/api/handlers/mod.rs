//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod metrics;
pub mod redirect;
pub mod shorten;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use metrics::top_domains_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
