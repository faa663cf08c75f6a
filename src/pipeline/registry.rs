// src/pipeline/registry.rs

//! URL claim set and per-server download permits.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::pool::Semaphore;

/// Set of URLs already claimed by some crawl job.
///
/// Every download is guarded by a successful claim; once a URL is in the
/// set no other job may download it.
#[derive(Debug, Default)]
pub struct SeenUrls {
    urls: Mutex<HashSet<String>>,
}

impl SeenUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically insert `url`, returning `true` iff the caller is the
    /// first claimant.
    pub fn try_claim(&self, url: &str) -> bool {
        self.urls.lock().unwrap().insert(url.to_string())
    }
}

/// Per-origin download permits, created lazily on first use.
///
/// Each server gets an independent counting semaphore, so waits against one
/// origin never block acquisitions on another. The creation map has its own
/// mutex, distinct from every permit: a thread holding a permit never blocks
/// lazy creation.
pub struct ServerPermits {
    limit: usize,
    servers: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl ServerPermits {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            servers: Mutex::new(HashMap::new()),
        }
    }

    /// Block until fewer than the limit of downloads are active against
    /// `server`, then return a guard holding the permit.
    pub fn acquire(&self, server: &str) -> ServerPermit {
        let semaphore = {
            let mut servers = self.servers.lock().unwrap();
            servers
                .entry(server.to_string())
                .or_insert_with(|| Arc::new(Semaphore::new(self.limit)))
                .clone()
        };
        semaphore.acquire();
        ServerPermit { semaphore }
    }
}

/// RAII guard for one server download slot; released on drop.
pub struct ServerPermit {
    semaphore: Arc<Semaphore>,
}

impl Drop for ServerPermit {
    fn drop(&mut self) {
        self.semaphore.release();
    }
}
