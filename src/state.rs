//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::InMemoryUrlRepository;

/// Shortener service backed by the in-memory repository.
pub type Shortener = ShortenerService<InMemoryUrlRepository>;

/// Cloneable handle to the service graph.
///
/// Owns the only store instance through the service; there are no
/// process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    /// Number of entries the top-domains endpoint reports.
    pub top_domains_limit: i64,
}

impl AppState {
    pub fn new(shortener: Arc<Shortener>, top_domains_limit: i64) -> Self {
        Self {
            shortener,
            top_domains_limit,
        }
    }
}
