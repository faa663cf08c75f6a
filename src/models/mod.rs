//! Domain models for the aggregator.

mod article;
mod config;

use serde::Serialize;

pub use article::{Article, FeedRef};
pub use config::CrawlConfig;

/// Summary of a finished crawl.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CrawlReport {
    /// Feeds fetched and parsed successfully
    pub feeds_ok: usize,
    /// Feeds that failed to fetch or parse and were skipped
    pub feeds_failed: usize,
    /// Articles tokenized and handed to the deduper
    pub articles_indexed: usize,
    /// Articles whose download or parse failed
    pub articles_failed: usize,
    /// Feed or article URLs dropped because another job already claimed them
    pub duplicates_skipped: usize,
}
