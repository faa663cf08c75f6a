// src/aggregator.rs

//! The aggregator facade: build the index once, query it interactively.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::index::NewsIndex;
use crate::models::{Article, CrawlConfig, CrawlReport};
use crate::pipeline::Crawler;
use crate::services::{DocumentSource, FeedSource, HtmlDocuments, RssFeeds};
use crate::utils::{truncate_for_display, HttpClient};

/// Matches displayed per query before the list is cut off.
const MAX_MATCHES_SHOWN: usize = 15;

/// Display width for titles and URLs in query results.
const DISPLAY_WIDTH: usize = 60;

/// One-shot news aggregator over a root feed list.
pub struct NewsAggregator {
    feed_list_url: String,
    crawler: Crawler,
    index: NewsIndex,
    built: bool,
}

impl NewsAggregator {
    /// Build an aggregator with HTTP-backed collaborators.
    pub fn new(config: CrawlConfig, feed_list_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        let feeds = Arc::new(RssFeeds::new(http.clone()));
        let docs = Arc::new(HtmlDocuments::new(http));
        Ok(Self::with_sources(config, feed_list_url, feeds, docs))
    }

    /// Build an aggregator over arbitrary collaborators (tests use
    /// in-memory sources).
    pub fn with_sources(
        config: CrawlConfig,
        feed_list_url: impl Into<String>,
        feeds: Arc<dyn FeedSource>,
        docs: Arc<dyn DocumentSource>,
    ) -> Self {
        Self {
            feed_list_url: feed_list_url.into(),
            crawler: Crawler::new(&config, feeds, docs),
            index: NewsIndex::new(),
            built: false,
        }
    }

    /// Crawl the feed list and build the index. Idempotent: the second and
    /// later calls return immediately.
    pub fn build_index(&mut self) -> CrawlReport {
        if self.built {
            return CrawlReport::default();
        }
        self.built = true;
        let report = self.crawler.run(&self.feed_list_url, &mut self.index);
        info!(
            feeds_ok = report.feeds_ok,
            feeds_failed = report.feeds_failed,
            articles_indexed = report.articles_indexed,
            articles_failed = report.articles_failed,
            duplicates_skipped = report.duplicates_skipped,
            terms = self.index.term_count(),
            "crawl finished"
        );
        report
    }

    /// Articles matching `term`, most frequent first.
    pub fn search(&self, term: &str) -> Vec<(Article, usize)> {
        self.index.matching(term)
    }

    /// Interactive query loop over stdin/stdout. An empty line ends it.
    pub fn query_index(&self) {
        let stdin = io::stdin();
        let _ = self.query_loop(stdin.lock(), io::stdout());
    }

    fn query_loop(&self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "Enter a search term [or just hit <enter> to quit]: ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let term = line?.trim().to_string();
            if term.is_empty() {
                break;
            }
            self.print_matches(&term, &mut out)?;
        }
        Ok(())
    }

    fn print_matches(&self, term: &str, out: &mut impl Write) -> io::Result<()> {
        let matches = self.search(term);
        if matches.is_empty() {
            return writeln!(out, "Ah, we didn't find the term \"{term}\". Try again.");
        }

        let plural = if matches.len() == 1 { "" } else { "s" };
        write!(out, "That term appears in {} article{plural}.  ", matches.len())?;
        if matches.len() > MAX_MATCHES_SHOWN {
            writeln!(out, "Here are the top {MAX_MATCHES_SHOWN} of them:")?;
        } else if matches.len() > 1 {
            writeln!(out, "Here they are:")?;
        } else {
            writeln!(out, "Here it is:")?;
        }

        for (position, (article, count)) in matches.iter().take(MAX_MATCHES_SHOWN).enumerate() {
            let title = truncate_for_display(&article.title, DISPLAY_WIDTH);
            let url = truncate_for_display(&article.url, DISPLAY_WIDTH);
            let times = if *count == 1 { "time" } else { "times" };
            writeln!(
                out,
                "  {:2}.) \"{title}\" [appears {count} {times}].",
                position + 1
            )?;
            writeln!(out, "       \"{url}\"")?;
        }
        Ok(())
    }
}
