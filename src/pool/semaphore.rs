// src/pool/semaphore.rs

//! Blocking counting semaphore.

use std::sync::{Condvar, Mutex};

/// A counting semaphore for OS threads.
///
/// Backs the worker mailboxes (capacity 1) and the per-server download
/// permits. `acquire` blocks until a permit is available; `release` returns
/// one and wakes a single waiter.
#[derive(Debug)]
pub struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    /// Create a semaphore holding `permits` initial permits.
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Take one permit, blocking until one is available.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock().unwrap();
        while *permits == 0 {
            permits = self.available.wait(permits).unwrap();
        }
        *permits -= 1;
    }

    /// Return one permit and wake a waiter.
    pub fn release(&self) {
        let mut permits = self.permits.lock().unwrap();
        *permits += 1;
        self.available.notify_one();
    }
}
