//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reaper period and maximum entry age for the response cache
    pub reap_interval: Duration,
    /// Root URL of the PokeAPI
    pub base_url: String,
    /// Number of location areas per `map` page
    pub page_size: u32,
    /// Timeout for a single HTTP request
    pub http_timeout: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_REAP_INTERVAL` - Cache reap interval in seconds (default: 5, minimum: 1)
    /// - `POKEAPI_BASE_URL` - PokeAPI root URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            reap_interval: env::var("POKEDEX_REAP_INTERVAL")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| Duration::from_secs(secs.max(1)))
                .unwrap_or(defaults.reap_interval),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reap_interval: Duration::from_secs(5),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 20,
            http_timeout: Duration::from_secs(30),
        }
    }
}
