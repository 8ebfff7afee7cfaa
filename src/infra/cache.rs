//! In-memory TTL memo for fetched snapshots.
//!
//! Each client owns one of these; the metadata and price caches expire on
//! unrelated cadences and are never coupled.

use std::time::{Duration, Instant};

/// A fetched value plus the moment it was fetched.
#[derive(Clone, Debug)]
pub struct Cached<T> {
    value: T,
    fetched_at: Instant,
}

impl<T: Clone> Cached<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    /// Returns a copy of the value while it is younger than `ttl`.
    /// A stale-within-TTL read is accepted; expiry is the only
    /// invalidation signal.
    pub fn if_fresh(&self, ttl: Duration) -> Option<T> {
        if self.fetched_at.elapsed() <= ttl {
            Some(self.value.clone())
        } else {
            None
        }
    }

    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}
