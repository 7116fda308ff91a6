//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached response body stamped with its insertion time.
///
/// Entries are never mutated in place. Writing the same key again replaces the
/// whole entry, which resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion time
    pub created_at: Instant,
    /// Write sequence number, unique per store
    pub generation: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `created_at`.
    pub fn new(value: Vec<u8>, created_at: Instant, generation: u64) -> Self {
        Self {
            value,
            created_at,
            generation,
        }
    }

    // == Age ==
    /// Returns how long the entry has been stored as of `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl`.
    ///
    /// Boundary condition: the comparison is strictly greater-than, so an entry
    /// whose age is exactly `ttl` is kept until the following sweep.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
