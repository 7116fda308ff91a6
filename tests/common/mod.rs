//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pokedex::{Cache, FetchError, Fetcher, PokeApiClient, Session};

pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// Fetcher answering from a fixed URL -> body table.
///
/// Unknown URLs answer 404; URLs marked with `fail` answer 503.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<HashMap<String, Vec<u8>>>,
    failing: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.responses.lock().unwrap().insert(url.into(), body.into());
    }

    pub fn fail(&self, url: impl Into<String>) {
        self.failing.lock().unwrap().insert(url.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.failing.lock().unwrap().contains(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 503,
            });
        }

        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn page_url(offset: u32) -> String {
    format!("{}/location-area/?offset={}&limit=2", BASE_URL, offset)
}

/// Builds a two-item location page body with optional neighbours.
pub fn page_body(names: [&str; 2], next: Option<String>, previous: Option<String>) -> String {
    serde_json::json!({
        "count": 6,
        "next": next,
        "previous": previous,
        "results": names
            .iter()
            .map(|name| serde_json::json!({ "name": name, "url": format!("{}/location-area/{}/", BASE_URL, name) }))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

pub fn pokemon_body(name: &str, base_experience: u32) -> String {
    serde_json::json!({
        "name": name,
        "base_experience": base_experience,
        "height": 4,
        "weight": 60,
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "u" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "u" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "u" } }
        ]
    })
    .to_string()
}

/// Client with page size 2 over `fetcher` and a fresh cache.
pub fn client(fetcher: Arc<ScriptedFetcher>) -> PokeApiClient {
    PokeApiClient::new(Cache::new(Duration::from_secs(60)), fetcher, BASE_URL, 2)
}

/// Session whose catch rolls always return `roll`.
pub fn session(fetcher: Arc<ScriptedFetcher>, roll: f64) -> Session {
    Session::with_roll(client(fetcher), Box::new(move || roll))
}
