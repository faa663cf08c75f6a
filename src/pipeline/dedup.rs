// src/pipeline/dedup.rs

//! Deduplication of articles republished under one title on one server.
//!
//! News sites routinely expose the same story under several URLs. Articles
//! sharing `(server, title)` collapse into a single canonical entry: the
//! smallest article by the `(title, url)` ordering, carrying the
//! intersection of every token set observed for the group. Intersecting
//! keeps only the words common to all variants, which strips
//! per-URL boilerplate.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::index::NewsIndex;
use crate::models::Article;

type TitleMap = HashMap<String, (Article, Vec<String>)>;

/// Accumulator mapping `server → title → (canonical article, tokens)`.
///
/// All reads and writes happen under one mutex; each critical section is a
/// map probe plus at most one linear merge of two sorted lists.
#[derive(Debug, Default)]
pub struct ArticleDeduper {
    entries: Mutex<HashMap<String, TitleMap>>,
}

impl ArticleDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `article` on `server`.
    ///
    /// `sorted_tokens` must be sorted ascending and deduplicated. The first
    /// observation of a `(server, title)` group stores the pair as-is; later
    /// observations shrink the token list to the intersection and keep the
    /// smaller article.
    pub fn observe(&self, server: &str, article: Article, sorted_tokens: Vec<String>) {
        debug_assert!(sorted_tokens.windows(2).all(|w| w[0] < w[1]));

        let mut entries = self.entries.lock().unwrap();
        let titles = entries.entry(server.to_string()).or_default();
        match titles.get_mut(&article.title) {
            Some((canonical, tokens)) => {
                *tokens = intersect_sorted(tokens, &sorted_tokens);
                if article < *canonical {
                    *canonical = article;
                }
            }
            None => {
                titles.insert(article.title.clone(), (article, sorted_tokens));
            }
        }
    }

    /// Drain every entry into the index. Runs once, after the crawl has
    /// quiesced; the caller owns the index and thereby serializes writes.
    pub fn finalize(&self, index: &mut NewsIndex) {
        let entries = self.entries.lock().unwrap();
        for titles in entries.values() {
            for (article, tokens) in titles.values() {
                index.add(article.clone(), tokens);
            }
        }
    }
}

/// Intersection of two sorted, deduplicated lists via a linear merge.
fn intersect_sorted(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    out
}
