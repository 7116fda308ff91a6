//! Per-run REPL state: pagination cursor and the caught Pokemon.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// Source of catch rolls in `[0, 1)`.
pub type Roll = Box<dyn FnMut() -> f64 + Send>;

/// A Pokemon stored in the Pokedex.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// State shared by all commands of one REPL run.
pub struct Session {
    pub(crate) client: PokeApiClient,
    /// Link to the next location page, once a page has been shown
    pub(crate) next_page: Option<String>,
    /// Link to the previous location page
    pub(crate) previous_page: Option<String>,
    /// Whether `map` has shown any page yet
    pub(crate) listed: bool,
    pokedex: BTreeMap<String, CaughtPokemon>,
    roll: Roll,
}

impl Session {
    /// Creates a session that rolls catches with the thread-local RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_roll(client, Box::new(|| rand::thread_rng().gen::<f64>()))
    }

    /// Creates a session with a custom catch roll.
    pub fn with_roll(client: PokeApiClient, roll: Roll) -> Self {
        Self {
            client,
            next_page: None,
            previous_page: None,
            listed: false,
            pokedex: BTreeMap::new(),
            roll,
        }
    }

    /// The API client commands go through.
    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Draws the next catch roll.
    pub(crate) fn roll(&mut self) -> f64 {
        (self.roll)()
    }

    /// Stores `pokemon`, replacing an earlier catch of the same name.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.pokedex.insert(
            pokemon.name.clone(),
            CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            },
        );
    }

    /// Looks up a caught Pokemon by name.
    pub fn caught(&self, name: &str) -> Option<&CaughtPokemon> {
        self.pokedex.get(name)
    }

    /// Caught Pokemon in name order.
    pub fn pokedex(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.pokedex.values()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client)
            .field("next_page", &self.next_page)
            .field("previous_page", &self.previous_page)
            .field("caught", &self.pokedex.len())
            .finish_non_exhaustive()
    }
}

/// Chance of catching a Pokemon with the given base experience.
///
/// Falls from 1.0 at zero experience towards 0 as experience grows; a
/// Pokemon without a recorded value is treated as zero.
pub fn catch_chance(base_experience: Option<u32>) -> f64 {
    const SCALE: f64 = 50.0;
    let experience = f64::from(base_experience.unwrap_or(0));
    SCALE / (SCALE + experience)
}
