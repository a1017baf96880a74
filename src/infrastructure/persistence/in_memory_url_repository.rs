//! In-memory implementation of [`UrlRepository`].

use std::sync::Arc;

use dashmap::DashMap;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;

/// Process-lifetime store indexing records by short code and by original URL.
///
/// Both indexes share one `Arc` per record, so a reader on either key sees
/// either nothing or the fully built record. `DashMap` shards its locks, which
/// keeps concurrent lookups on different keys from contending.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    by_code: DashMap<String, Arc<ShortenedUrl>>,
    by_url: DashMap<String, Arc<ShortenedUrl>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UrlRepository for InMemoryUrlRepository {
    fn insert(&self, record: ShortenedUrl) {
        let record = Arc::new(record);

        self.by_code
            .insert(record.short_code.clone(), Arc::clone(&record));
        self.by_url.insert(record.original_url.clone(), record);
    }

    fn find_by_code(&self, code: &str) -> Option<Arc<ShortenedUrl>> {
        self.by_code.get(code).map(|entry| Arc::clone(entry.value()))
    }

    fn find_by_url(&self, url: &str) -> Option<Arc<ShortenedUrl>> {
        self.by_url.get(url).map(|entry| Arc::clone(entry.value()))
    }

    fn exists_by_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    fn find_all(&self) -> Vec<Arc<ShortenedUrl>> {
        self.by_code
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    fn count(&self) -> usize {
        self.by_code.len()
    }
}
