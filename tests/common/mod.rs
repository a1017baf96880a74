#![allow(dead_code)]

use std::sync::Arc;
use url_shortener::application::services::ShortenerService;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;
use url_shortener::state::{AppState, Shortener};

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_shortener() -> Arc<Shortener> {
    let repository = Arc::new(InMemoryUrlRepository::new());
    Arc::new(ShortenerService::new(repository, BASE_URL))
}

pub fn create_test_state() -> AppState {
    AppState::new(create_test_shortener(), 3)
}

/// Returns the short code part of a short URL.
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{BASE_URL}/"))
        .expect("short URL must start with the base URL")
        .to_string()
}
