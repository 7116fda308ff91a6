//! Cache Handle Module
//!
//! The shareable, thread-safe cache used by the rest of the application.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::stats::LookupCounters;
use crate::cache::{CacheStats, CacheStore};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Cache ==
/// Expiring byte cache keyed by string, with its own background reaper.
///
/// Cloning a `Cache` creates another handle to the same entries and reaper.
/// Reads share a read lock; inserts and sweeps take the write lock for a
/// single structural change. Entries are removed by the reaper once they are
/// older than the reap interval, so a value can be observed for up to one
/// extra interval past its nominal TTL.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    counters: Arc<LookupCounters>,
    reaper: Arc<ReaperHandle>,
    reap_interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `reap_interval` is both the sweep period and the maximum age of an
    /// entry. Must be called from within a tokio runtime.
    pub fn new(reap_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(reap_interval)));
        let reaper = spawn_reaper(store.clone(), reap_interval);

        Self {
            store,
            counters: Arc::new(LookupCounters::default()),
            reaper: Arc::new(reaper),
            reap_interval,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();

        let mut store = self.store.write().await;
        // Stamp under the lock so the expiry index stays time-ordered
        store.insert(key, value, Instant::now());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if it has not been reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.store.read().await.get(key);

        match value {
            Some(_) => self.counters.record_hit(),
            None => self.counters.record_miss(),
        }
        value
    }

    // == Reap Now ==
    /// Runs one sweep immediately and returns the number of evicted entries.
    pub async fn reap_now(&self) -> usize {
        let mut store = self.store.write().await;
        let removed = store.reap(Instant::now());
        debug!("Manual sweep removed {} entries", removed);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        CacheStats {
            hits: self.counters.hits(),
            misses: self.counters.misses(),
            reaped: store.reaped(),
            total_entries: store.len(),
        }
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns the configured reap interval.
    pub fn reap_interval(&self) -> Duration {
        self.reap_interval
    }

    // == Lifecycle ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Entries already stored stay readable, but nothing expires afterwards.
    pub async fn shutdown(&self) {
        self.reaper.shutdown().await;
    }

    /// Returns true while the background reaper is running.
    pub fn is_reaper_running(&self) -> bool {
        self.reaper.is_running()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(10);

    #[tokio::test]
    async fn test_add_get() {
        let cases: [(&str, &[u8]); 2] = [
            ("https://example.com", b"testdata"),
            ("https://example.com/path", b"moretestdata"),
        ];

        for (key, value) in cases {
            let cache = Cache::new(INTERVAL);
            cache.add(key, value).await;

            assert_eq!(cache.get(key).await.as_deref(), Some(value));
        }
    }

    #[tokio::test]
    async fn test_get_missing() {
        let cache = Cache::new(INTERVAL);
        assert!(cache.get("https://example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = Cache::new(INTERVAL);
        let other = cache.clone();

        cache.add("key", b"value".to_vec()).await;

        assert_eq!(other.get("key").await, Some(b"value".to_vec()));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_loop() {
        let cache = Cache::new(INTERVAL);
        cache.add("https://x/1", b"abc".to_vec()).await;

        assert_eq!(cache.get("https://x/1").await, Some(b"abc".to_vec()));

        tokio::time::sleep(Duration::from_secs(25)).await;

        assert!(cache.get("https://x/1").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_survives_until_interval() {
        let cache = Cache::new(INTERVAL);
        cache.add("key", b"v".to_vec()).await;

        tokio::time::sleep(INTERVAL - Duration::from_millis(1)).await;
        assert!(cache.get("key").await.is_some());

        // The tick at exactly one interval sees an age equal to the TTL
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(cache.get("key").await.is_some());

        tokio::time::sleep(INTERVAL).await;
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_age() {
        let cache = Cache::new(INTERVAL);
        cache.add("key", b"v1".to_vec()).await;

        tokio::time::sleep(Duration::from_secs(15)).await;
        cache.add("key", b"v2".to_vec()).await;

        // The first write would have been swept at 20s
        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(cache.get("key").await, Some(b"v2".to_vec()));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(cache.get("key").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_now() {
        let cache = Cache::new(Duration::from_secs(60));
        cache.add("key", b"v".to_vec()).await;

        assert_eq!(cache.reap_now().await, 0);

        tokio::time::advance(Duration::from_secs(61)).await;
        // Either the reaper or this sweep removes it, never both
        cache.reap_now().await;

        assert!(cache.is_empty().await);
        assert_eq!(cache.stats().await.reaped, 1);
    }

    #[tokio::test]
    async fn test_stats_track_lookups() {
        let cache = Cache::new(INTERVAL);
        cache.add("key", b"v".to_vec()).await;

        cache.get("key").await;
        cache.get("missing").await;

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_expiry() {
        let cache = Cache::new(INTERVAL);
        assert!(cache.is_reaper_running());

        cache.add("key", b"v".to_vec()).await;
        cache.shutdown().await;
        assert!(!cache.is_reaper_running());

        tokio::time::sleep(INTERVAL * 3).await;
        assert!(cache.get("key").await.is_some(), "No sweeps after shutdown");
    }
}
