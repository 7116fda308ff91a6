//! Fetch-or-populate helper.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::Fetcher;
use crate::cache::Cache;
use crate::error::{PokedexError, Result};

/// Returns the value behind `key`, going through `cache` first.
///
/// On a miss the raw body is fetched and stored under `key` before decoding.
/// A failed fetch leaves the cache untouched. A decode failure is reported as
/// [`PokedexError::Decode`] and keeps whatever bytes are cached.
pub async fn fetch_cached<T>(cache: &Cache, fetcher: &dyn Fetcher, key: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let bytes = match cache.get(key).await {
        Some(bytes) => {
            debug!("Cache hit for {}", key);
            bytes
        }
        None => {
            debug!("Cache miss for {}, fetching", key);
            let bytes = fetcher.fetch(key).await?;
            cache.add(key, bytes.clone()).await;
            bytes
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| PokedexError::Decode {
        key: key.to_string(),
        source,
    })
}
