//! # Query Cache
//!
//! Responses keyed by [`QueryKey`], with a stale time after which an entry
//! is still served but refetched, and a capacity bound that evicts the
//! oldest entries first.

use crate::repl::models::{MovieSearchResponse, QueryKey};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    response: Arc<MovieSearchResponse>,
    fetched_at: Instant,
}

/// Result of a cache lookup
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// Entry younger than the stale time
    Fresh(Arc<MovieSearchResponse>),
    /// Entry present but due for revalidation
    Stale(Arc<MovieSearchResponse>),
    Miss,
}

#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_time: Duration,
    capacity: usize,
}

impl QueryCache {
    pub fn new(stale_time: Duration, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
            capacity: capacity.max(1),
        }
    }

    pub fn lookup(&self, key: &QueryKey) -> CacheLookup {
        self.lookup_at(key, Instant::now())
    }

    pub fn lookup_at(&self, key: &QueryKey, now: Instant) -> CacheLookup {
        match self.entries.get(key) {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < self.stale_time => {
                CacheLookup::Fresh(Arc::clone(&entry.response))
            }
            Some(entry) => CacheLookup::Stale(Arc::clone(&entry.response)),
            None => CacheLookup::Miss,
        }
    }

    pub fn insert(&mut self, key: QueryKey, response: Arc<MovieSearchResponse>) {
        self.insert_at(key, response, Instant::now());
    }

    pub fn insert_at(&mut self, key: QueryKey, response: Arc<MovieSearchResponse>, now: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                response,
                fetched_at: now,
            },
        );
        self.evict_overflow();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    fn evict_overflow(&mut self) {
        while self.entries.len() > self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.fetched_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    tracing::debug!("Evicting cached page {}", key);
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
    }
}
