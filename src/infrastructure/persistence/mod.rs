//! Storage implementations of the domain repository traits.

pub mod in_memory_url_repository;

pub use in_memory_url_repository::InMemoryUrlRepository;
