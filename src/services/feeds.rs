// src/services/feeds.rs

//! RSS parsing service.
//!
//! The root feed list and the individual feeds are both RSS documents: the
//! feed list's entries link to feed XML documents, a feed's entries link to
//! articles. Failures are signaled distinctly — a dead feed list is fatal to
//! the crawl, a dead feed is skipped.

use std::io::Cursor;

use feed_rs::model::Entry;
use feed_rs::parser;

use crate::error::{AppError, Result};
use crate::models::{Article, FeedRef};
use crate::utils::url::resolve_link;
use crate::utils::HttpClient;

/// Source of feed lists and feeds.
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the root feed list into `(feed_url, feed_title)` pairs.
    fn fetch_feed_list(&self, url: &str) -> Result<Vec<FeedRef>>;

    /// Fetch and parse one feed into its articles.
    fn fetch_feed(&self, url: &str) -> Result<Vec<Article>>;
}

/// HTTP-backed RSS source.
pub struct RssFeeds {
    http: HttpClient,
}

impl RssFeeds {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn fetch_entries(&self, url: &str) -> std::result::Result<Vec<Entry>, String> {
        let bytes = self.http.get_bytes(url).map_err(|e| e.to_string())?;
        let feed = parser::parse(Cursor::new(bytes)).map_err(|e| e.to_string())?;
        Ok(feed.entries)
    }
}

impl FeedSource for RssFeeds {
    fn fetch_feed_list(&self, url: &str) -> Result<Vec<FeedRef>> {
        let entries = self
            .fetch_entries(url)
            .map_err(|message| AppError::feed_list(url, message))?;
        Ok(entries
            .iter()
            .filter_map(|entry| {
                let link = select_entry_link(entry)?;
                Some(FeedRef::new(resolve_link(url, &link), entry_title(entry)))
            })
            .collect())
    }

    fn fetch_feed(&self, url: &str) -> Result<Vec<Article>> {
        let entries = self
            .fetch_entries(url)
            .map_err(|message| AppError::feed(url, message))?;
        Ok(entries
            .iter()
            .filter_map(|entry| {
                let link = select_entry_link(entry)?;
                Some(Article::new(resolve_link(url, &link), entry_title(entry)))
            })
            .collect())
    }
}

/// Pick an entry's link, preferring `rel="alternate"` (or no rel) over
/// enclosure-style links. Entries without any usable link are dropped.
fn select_entry_link(entry: &Entry) -> Option<String> {
    for link in &entry.links {
        let href = link.href.trim();
        if href.is_empty() {
            continue;
        }
        let rel = link.rel.as_deref().unwrap_or("");
        if rel.is_empty() || rel.eq_ignore_ascii_case("alternate") {
            return Some(href.to_string());
        }
    }
    entry
        .links
        .iter()
        .find(|link| !link.href.trim().is_empty())
        .map(|link| link.href.clone())
}

fn entry_title(entry: &Entry) -> String {
    entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .unwrap_or_default()
}
