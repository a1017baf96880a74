//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export BASE_URL="https://s.example.com"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Prefix for generated short URLs, without trailing slash
//!   (default: `http://localhost:8080`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOP_DOMAINS_LIMIT` - Entries returned by `/metrics/top-domains` (default: 3)
//! - `CODE_GENERATION_MAX_ATTEMPTS` - Collision retries before giving up (default: 1000)

use anyhow::Result;
use std::env;

use crate::application::services::shortener_service::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of every short URL, used verbatim.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Number of domains reported by the top-domains endpoint.
    pub top_domains_limit: i64,
    /// Upper bound on code generation attempts for a single link.
    pub code_generation_max_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let top_domains_limit = env::var("TOP_DOMAINS_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let code_generation_max_attempts = env::var("CODE_GENERATION_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Self {
            base_url,
            listen_addr,
            log_level,
            log_format,
            top_domains_limit,
            code_generation_max_attempts,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is not an `http://` or `https://` URL, or ends with `/`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `top_domains_limit` is outside 1..=100
    /// - `code_generation_max_attempts` is 0
    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.base_url.ends_with('/') {
            anyhow::bail!(
                "BASE_URL must not end with a trailing slash, got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(1..=100).contains(&self.top_domains_limit) {
            anyhow::bail!(
                "TOP_DOMAINS_LIMIT must be between 1 and 100, got {}",
                self.top_domains_limit
            );
        }

        if self.code_generation_max_attempts == 0 {
            anyhow::bail!("CODE_GENERATION_MAX_ATTEMPTS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Top domains limit: {}", self.top_domains_limit);
        tracing::info!(
            "  Code generation attempts: {}",
            self.code_generation_max_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
