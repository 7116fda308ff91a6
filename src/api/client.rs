//! PokeAPI client
//!
//! Builds request URLs and decodes responses, delegating every lookup to
//! [`fetch_cached`] so repeated requests are answered from the cache.

use std::sync::Arc;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{fetch_cached, Fetcher, HttpFetcher};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Cache-backed PokeAPI client.
///
/// The cache handle is injected, so several clients (or tests) can share one
/// cache or each own an independent one.
#[derive(Clone)]
pub struct PokeApiClient {
    cache: Cache,
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    /// Creates a client from explicit parts.
    pub fn new(
        cache: Cache,
        fetcher: Arc<dyn Fetcher>,
        base_url: impl Into<String>,
        page_size: u32,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            cache,
            fetcher,
            base_url,
            page_size,
        }
    }

    /// Creates a client that talks HTTP to the configured base URL.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.http_timeout)?;
        Ok(Self::new(
            cache,
            Arc::new(fetcher),
            config.base_url.clone(),
            config.page_size,
        ))
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Fetches the location area page at `url`.
    ///
    /// `url` is either [`first_page_url`](Self::first_page_url) or a
    /// `next`/`previous` link from an earlier page.
    pub async fn list_location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        fetch_cached(&self.cache, self.fetcher.as_ref(), url).await
    }

    /// Fetches one location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        fetch_cached(&self.cache, self.fetcher.as_ref(), &url).await
    }

    /// Fetches one Pokemon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        fetch_cached(&self.cache, self.fetcher.as_ref(), &url).await
    }

    /// The cache this client reads through.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
