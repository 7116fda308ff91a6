//! Fetch Module
//!
//! Network retrieval of raw response bodies and the cache-transparent
//! fetch-or-populate helper built on top of it.

mod cached;
mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use cached::fetch_cached;
pub use http::HttpFetcher;

// == Fetcher Trait ==
/// Retrieves the raw body behind a URL.
///
/// Implementations do not retry or cache; that is left to the caller.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns the response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
