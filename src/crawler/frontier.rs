//! Crawl frontier and visited set
//!
//! The frontier is a FIFO of URLs waiting to be fetched. Membership in the
//! visited set is checked and recorded at enqueue time, so a URL can enter
//! the queue at most once over the whole crawl.

use std::collections::{HashSet, VecDeque};

/// Pending URLs plus every URL ever scheduled
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be dispatched, oldest first
    queue: VecDeque<String>,

    /// Every URL ever enqueued; only grows
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only the seed
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.push(seed);
        frontier
    }

    /// Enqueues a URL unless it was ever enqueued before
    ///
    /// Returns true if the URL was newly added.
    pub fn push(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.visited.insert(url.clone()) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Takes the next URL to dispatch
    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Number of URLs waiting to be dispatched
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if the URL was ever enqueued
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }
}
