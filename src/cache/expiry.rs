//! Expiry Queue Module
//!
//! Time-ordered index of writes so a sweep only touches expired records.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

// == Expiry Record ==
/// One write, as seen by the expiry queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryRecord {
    /// Key that was written
    pub key: String,
    /// Time of the write
    pub created_at: Instant,
    /// Generation of the entry this record belongs to
    pub generation: u64,
}

// == Expiry Queue ==
/// Tracks writes in insertion order for TTL eviction.
///
/// Records are stored in a VecDeque where:
/// - Front = oldest write
/// - Back = newest write
///
/// Every entry shares the same TTL, so insertion order is also expiry order.
/// A key that is overwritten leaves its old record behind; the store compares
/// generations when popping and skips records that no longer match.
#[derive(Debug, Default)]
pub struct ExpiryQueue {
    order: VecDeque<ExpiryRecord>,
}

impl ExpiryQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a write. Callers must push in non-decreasing `created_at` order.
    pub fn push(&mut self, key: String, created_at: Instant, generation: u64) {
        debug_assert!(self
            .order
            .back()
            .map_or(true, |last| last.created_at <= created_at));

        self.order.push_back(ExpiryRecord {
            key,
            created_at,
            generation,
        });
    }

    // == Pop Expired ==
    /// Removes and returns the oldest record if it is older than `ttl`.
    ///
    /// Returns None once the front record is still live or the queue is empty.
    pub fn pop_expired(&mut self, now: Instant, ttl: Duration) -> Option<ExpiryRecord> {
        let front = self.order.front()?;
        if now.saturating_duration_since(front.created_at) > ttl {
            self.order.pop_front()
        } else {
            None
        }
    }

    // == Length ==
    /// Returns the number of tracked writes, stale ones included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(10);

    #[test]
    fn test_queue_new() {
        let queue = ExpiryQueue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_pop_expired_empty() {
        let mut queue = ExpiryQueue::new();
        assert!(queue.pop_expired(Instant::now(), TTL).is_none());
    }

    #[test]
    fn test_pop_expired_in_order() {
        let start = Instant::now();
        let mut queue = ExpiryQueue::new();
        queue.push("a".to_string(), start, 0);
        queue.push("b".to_string(), start + Duration::from_secs(5), 1);

        let now = start + Duration::from_secs(12);
        let first = queue.pop_expired(now, TTL).unwrap();
        assert_eq!(first.key, "a");

        // "b" is only 7 seconds old
        assert!(queue.pop_expired(now, TTL).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_boundary_record_is_kept() {
        let start = Instant::now();
        let mut queue = ExpiryQueue::new();
        queue.push("a".to_string(), start, 0);

        assert!(queue.pop_expired(start + TTL, TTL).is_none());
        assert!(queue.pop_expired(start + TTL + Duration::from_millis(1), TTL).is_some());
    }
}
