// src/models/config.rs

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Crawl behavior settings.
///
/// Loaded from an optional TOML file; every field falls back to the
/// reference configuration when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Worker threads parsing feed XML documents
    pub feed_workers: usize,

    /// Worker threads downloading and tokenizing article bodies
    pub article_workers: usize,

    /// Maximum simultaneous downloads against a single origin server
    pub per_server_limit: usize,

    /// Per-request HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Redirect hops allowed before a download fails
    pub max_redirects: usize,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            feed_workers: 8,
            article_workers: 24,
            per_server_limit: 10,
            timeout_secs: 20,
            max_redirects: 10,
            user_agent: concat!("newswire/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlConfig {
    /// Load configuration from a TOML file, or fall back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an error
    /// rather than a silent fallback.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let config = CrawlConfig::default();
        assert_eq!(config.feed_workers, 8);
        assert_eq!(config.article_workers, 24);
        assert_eq!(config.per_server_limit, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CrawlConfig = toml::from_str("article_workers = 4").unwrap();
        assert_eq!(config.article_workers, 4);
        assert_eq!(config.feed_workers, 8);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = CrawlConfig::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config.per_server_limit, 10);
    }
}
