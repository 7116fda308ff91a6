//! Cache Store Module
//!
//! Single-threaded core of the cache: the key map plus its expiry index.
//! Callers provide the clock reading so sweeps are deterministic under test.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::expiry::ExpiryQueue;
use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with insertion-time TTL eviction.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Writes ordered by insertion time
    expiry: ExpiryQueue,
    /// Generation handed to the next write
    next_generation: u64,
    /// Entries removed by `reap` so far
    reaped: u64,
    /// Maximum age before an entry may be reaped
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            expiry: ExpiryQueue::new(),
            next_generation: 0,
            reaped: 0,
            ttl,
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with `now`.
    ///
    /// An existing entry is replaced outright, so its age restarts at zero.
    pub fn insert(&mut self, key: String, value: Vec<u8>, now: Instant) {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.expiry.push(key.clone(), now, generation);
        self.entries
            .insert(key, CacheEntry::new(value, now, generation));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Presence is decided by the map alone: an entry past its TTL is still
    /// returned until a sweep removes it.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry older than the TTL as of `now`.
    ///
    /// Work is proportional to the number of expired writes. A record whose
    /// key has been rewritten since carries an old generation and is dropped
    /// without touching the newer entry.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant) -> usize {
        let mut removed = 0;

        while let Some(record) = self.expiry.pop_expired(now, self.ttl) {
            let is_current = self
                .entries
                .get(&record.key)
                .is_some_and(|entry| entry.generation == record.generation);

            if is_current {
                self.entries.remove(&record.key);
                removed += 1;
            }
        }

        self.reaped += removed as u64;
        removed
    }

    // == Accessors ==
    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the total number of entries removed by sweeps.
    pub fn reaped(&self) -> u64 {
        self.reaped
    }

    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of records waiting in the expiry index.
    #[cfg(test)]
    pub(crate) fn pending_expiry_records(&self) -> usize {
        self.expiry.len()
    }
}
