// src/models/article.rs

//! Article and feed reference data structures.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single news item, identified by its URL and carrying a display title.
///
/// Articles are cheap value objects; jobs and the deduper copy them freely.
/// Two articles on the same server sharing a title are considered aliases of
/// one story, and the smaller article by [`Ord`] becomes the canonical one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Article {
    /// Full URL of the article body
    pub url: String,

    /// Article title as advertised by the feed
    pub title: String,
}

impl Article {
    /// Create an article from owned or borrowed parts.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

// Articles compare by (title, url) so that alias groups pick a deterministic
// canonical entry: the lexicographically smaller pair wins.
impl Ord for Article {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.title, &self.url).cmp(&(&other.title, &other.url))
    }
}

impl PartialOrd for Article {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An entry of the root feed list: one RSS feed to crawl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedRef {
    /// URL of the feed XML document
    pub url: String,

    /// Feed display title
    pub title: String,
}

impl FeedRef {
    /// Create a feed reference from owned or borrowed parts.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_prefers_smaller_title() {
        let a = Article::new("http://b/x", "Alpha");
        let b = Article::new("http://a/x", "Beta");
        assert!(a < b);
    }

    #[test]
    fn test_ordering_breaks_title_ties_by_url() {
        let a = Article::new("http://a/x", "Same");
        let b = Article::new("http://a/y", "Same");
        assert!(a < b);
        assert_eq!(a.clone().min(b), a);
    }

    #[test]
    fn test_equal_articles() {
        let a = Article::new("http://a/x", "T");
        let b = Article::new("http://a/x", "T");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
