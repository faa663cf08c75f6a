// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::redirect;

use crate::error::Result;
use crate::models::CrawlConfig;

/// Configured blocking HTTP client shared by every download in the crawl.
///
/// Redirects are followed up to the configured hop limit; past that, the
/// request fails the same way any other transport error does. Timeouts apply
/// per request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client from crawl configuration.
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the response body.
    ///
    /// Non-2xx statuses are errors; callers treat every failure the same way
    /// (skip the document), so no status is special-cased here.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
