// src/index.rs

//! In-memory inverted index over crawled articles.
//!
//! Maps each search term to the articles containing it and the number of
//! times the term appears in each. The index is built once during the crawl
//! finalization and read-only afterwards.

use std::collections::HashMap;

use crate::models::Article;

/// Inverted index: term → article → occurrence count.
#[derive(Debug, Default)]
pub struct NewsIndex {
    postings: HashMap<String, HashMap<Article, usize>>,
    article_count: usize,
}

impl NewsIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one article and its sorted token list.
    ///
    /// Equal tokens must be adjacent (the caller supplies a sorted list);
    /// each run becomes one posting with its run length as the count.
    pub fn add(&mut self, article: Article, sorted_tokens: &[String]) {
        self.article_count += 1;
        let mut i = 0;
        while i < sorted_tokens.len() {
            let token = &sorted_tokens[i];
            let mut count = 1;
            while i + count < sorted_tokens.len() && sorted_tokens[i + count] == *token {
                count += 1;
            }
            self.postings
                .entry(token.clone())
                .or_default()
                .insert(article.clone(), count);
            i += count;
        }
    }

    /// Articles containing `term`, most frequent first.
    ///
    /// Ties on the count are broken by the Article ordering so results are
    /// deterministic.
    pub fn matching(&self, term: &str) -> Vec<(Article, usize)> {
        let Some(articles) = self.postings.get(term) else {
            return Vec::new();
        };
        let mut matches: Vec<(Article, usize)> = articles
            .iter()
            .map(|(article, count)| (article.clone(), *count))
            .collect();
        matches.sort_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
        matches
    }

    /// Number of articles added to the index.
    pub fn article_count(&self) -> usize {
        self.article_count
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_missing_term_matches_nothing() {
        let index = NewsIndex::new();
        assert!(index.matching("anything").is_empty());
    }

    #[test]
    fn test_single_article_lookup() {
        let mut index = NewsIndex::new();
        let article = Article::new("http://a/x", "T");
        index.add(article.clone(), &tokens(&["alpha", "beta"]));

        assert_eq!(index.matching("alpha"), vec![(article.clone(), 1)]);
        assert_eq!(index.matching("beta"), vec![(article, 1)]);
        assert!(index.matching("gamma").is_empty());
    }

    #[test]
    fn test_run_lengths_become_counts() {
        let mut index = NewsIndex::new();
        let article = Article::new("http://a/x", "T");
        index.add(article.clone(), &tokens(&["m", "m", "m", "q"]));

        assert_eq!(index.matching("m"), vec![(article.clone(), 3)]);
        assert_eq!(index.matching("q"), vec![(article, 1)]);
    }

    #[test]
    fn test_ranking_by_count_descending() {
        let mut index = NewsIndex::new();
        let light = Article::new("http://a/light", "Light");
        let heavy = Article::new("http://a/heavy", "Heavy");
        index.add(light.clone(), &tokens(&["term"]));
        index.add(heavy.clone(), &tokens(&["term", "term", "term"]));

        assert_eq!(index.matching("term"), vec![(heavy, 3), (light, 1)]);
    }

    #[test]
    fn test_ties_broken_by_article_ordering() {
        let mut index = NewsIndex::new();
        let first = Article::new("http://a/x", "Apple");
        let second = Article::new("http://a/y", "Banana");
        index.add(second.clone(), &tokens(&["fruit"]));
        index.add(first.clone(), &tokens(&["fruit"]));

        assert_eq!(index.matching("fruit"), vec![(first, 1), (second, 1)]);
    }

    #[test]
    fn test_counts() {
        let mut index = NewsIndex::new();
        index.add(Article::new("http://a/x", "X"), &tokens(&["a", "b"]));
        index.add(Article::new("http://a/y", "Y"), &tokens(&["b", "c"]));
        assert_eq!(index.article_count(), 2);
        assert_eq!(index.term_count(), 3);
    }
}
