// src/error.rs

//! Unified error handling for the aggregator.

use std::fmt;

use thiserror::Error;

/// Result type alias for aggregator operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The root feed list could not be fetched or parsed. Fatal to the crawl.
    #[error("Feed list error for {url}: {message}")]
    FeedList { url: String, message: String },

    /// A single feed could not be fetched or parsed. The crawl skips it.
    #[error("Feed error for {url}: {message}")]
    Feed { url: String, message: String },

    /// A single article body could not be fetched or parsed. The crawl skips it.
    #[error("Document error for {url}: {message}")]
    Document { url: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a fatal feed-list error.
    pub fn feed_list(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::FeedList {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a skippable single-feed error.
    pub fn feed(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Feed {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a skippable article document error.
    pub fn document(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Document {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
