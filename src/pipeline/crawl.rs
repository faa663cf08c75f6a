// src/pipeline/crawl.rs

//! Crawl orchestration: the three-level fan-out from the feed list down to
//! individual article bodies.
//!
//! One pool parses feeds, a second downloads articles. A feed job schedules
//! its articles and then barriers on the article pool, so the outer
//! `feed_pool.wait()` observes true end-of-work. The article pool never
//! schedules feed work, which keeps that nested barrier cycle-free.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::index::NewsIndex;
use crate::models::{Article, CrawlConfig, CrawlReport, FeedRef};
use crate::pool::ThreadPool;
use crate::services::{DocumentSource, FeedSource};
use crate::utils::url::origin_of;

use super::dedup::ArticleDeduper;
use super::registry::{SeenUrls, ServerPermits};

/// Running counters shared by every crawl job.
#[derive(Debug, Default)]
struct CrawlCounters {
    feeds_ok: AtomicUsize,
    feeds_failed: AtomicUsize,
    articles_indexed: AtomicUsize,
    articles_failed: AtomicUsize,
    duplicates_skipped: AtomicUsize,
}

impl CrawlCounters {
    fn report(&self) -> CrawlReport {
        CrawlReport {
            feeds_ok: self.feeds_ok.load(Ordering::Relaxed),
            feeds_failed: self.feeds_failed.load(Ordering::Relaxed),
            articles_indexed: self.articles_indexed.load(Ordering::Relaxed),
            articles_failed: self.articles_failed.load(Ordering::Relaxed),
            duplicates_skipped: self.duplicates_skipped.load(Ordering::Relaxed),
        }
    }
}

/// State shared across feed and article jobs.
struct CrawlState {
    feeds: Arc<dyn FeedSource>,
    docs: Arc<dyn DocumentSource>,
    seen: SeenUrls,
    permits: ServerPermits,
    dedup: ArticleDeduper,
    article_pool: ThreadPool,
    stats: CrawlCounters,
}

/// Drives one crawl from a feed-list URL into an index.
pub struct Crawler {
    feed_pool: ThreadPool,
    state: Arc<CrawlState>,
}

impl Crawler {
    /// Create a crawler over the given collaborators.
    pub fn new(
        config: &CrawlConfig,
        feeds: Arc<dyn FeedSource>,
        docs: Arc<dyn DocumentSource>,
    ) -> Self {
        Self {
            feed_pool: ThreadPool::new(config.feed_workers.max(1)),
            state: Arc::new(CrawlState {
                feeds,
                docs,
                seen: SeenUrls::new(),
                permits: ServerPermits::new(config.per_server_limit),
                dedup: ArticleDeduper::new(),
                article_pool: ThreadPool::new(config.article_workers.max(1)),
                stats: CrawlCounters::default(),
            }),
        }
    }

    /// Crawl everything reachable from `feed_list_url` and finalize into
    /// `index`.
    ///
    /// A feed list that cannot be fetched or parsed is fatal: it is logged
    /// once and the index is left untouched. Every narrower failure is
    /// handled inside the responsible job.
    pub fn run(&self, feed_list_url: &str, index: &mut NewsIndex) -> CrawlReport {
        let feeds = match self.state.feeds.fetch_feed_list(feed_list_url) {
            Ok(feeds) => feeds,
            Err(e) => {
                error!(url = feed_list_url, error = %e, "feed list unavailable; nothing to crawl");
                return self.state.stats.report();
            }
        };
        debug!(url = feed_list_url, feeds = feeds.len(), "feed list parsed");

        for feed in feeds {
            let state = Arc::clone(&self.state);
            self.feed_pool.schedule(move || feed_job(&state, feed));
        }
        self.feed_pool.wait();

        self.state.dedup.finalize(index);
        self.state.stats.report()
    }
}

/// Parse one feed and fan out its articles.
fn feed_job(state: &Arc<CrawlState>, feed: FeedRef) {
    if !state.seen.try_claim(&feed.url) {
        state.stats.duplicates_skipped.fetch_add(1, Ordering::Relaxed);
        return;
    }

    let articles = match state.feeds.fetch_feed(&feed.url) {
        Ok(articles) => articles,
        Err(e) => {
            warn!(feed = %feed.url, error = %e, "skipping feed");
            state.stats.feeds_failed.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };
    debug!(feed = %feed.url, articles = articles.len(), "feed parsed");
    state.stats.feeds_ok.fetch_add(1, Ordering::Relaxed);

    for article in articles {
        let job_state = Arc::clone(state);
        state
            .article_pool
            .schedule(move || article_job(&job_state, article));
    }

    // Do not return while this feed's articles are still in flight; the
    // outer feed_pool.wait() relies on it.
    state.article_pool.wait();
}

/// Download and tokenize one article, then hand it to the deduper.
fn article_job(state: &Arc<CrawlState>, article: Article) {
    if !state.seen.try_claim(&article.url) {
        state.stats.duplicates_skipped.fetch_add(1, Ordering::Relaxed);
        return;
    }

    let server = origin_of(&article.url);
    let tokens = {
        // The permit covers only the download/parse of the body.
        let _permit = state.permits.acquire(&server);
        match state.docs.fetch_tokens(&article.url) {
            Ok(tokens) => tokens,
            Err(_) => {
                state.stats.articles_failed.fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
    };

    let mut tokens = tokens;
    tokens.sort();
    tokens.dedup();
    state.dedup.observe(&server, article, tokens);
    state.stats.articles_indexed.fetch_add(1, Ordering::Relaxed);
}
