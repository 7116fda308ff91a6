//! Cache Module
//!
//! Provides an in-memory response cache with age-based eviction.

mod entry;
mod expiry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiry::{ExpiryQueue, ExpiryRecord};
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
