//! Collaborator services for the crawl pipeline.
//!
//! The orchestrator talks to the outside world through two seams:
//! - [`FeedSource`] parses the root feed list and individual feeds
//! - [`DocumentSource`] downloads and tokenizes article bodies
//!
//! Production uses the HTTP-backed implementations; tests substitute
//! in-memory fakes.

mod feeds;
mod html;

pub use feeds::{FeedSource, RssFeeds};
pub use html::{tokenize_document, DocumentSource, HtmlDocuments};
