//! API Module
//!
//! Typed access to the PokeAPI through the response cache.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Paginated location areas
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
