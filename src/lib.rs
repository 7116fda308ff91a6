//! Pokedex - an interactive explorer for the PokeAPI
//!
//! Pages through location areas, explores them and catches Pokemon. Every
//! API response goes through an in-memory cache whose entries are evicted
//! by a background reaper once they outlive the configured interval.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{FetchError, PokedexError, Result};
pub use fetch::{fetch_cached, Fetcher, HttpFetcher};
pub use repl::Session;
