//! PokeAPI response models
//!
//! Only the fields the REPL shows are declared; everything else in the
//! payloads is ignored by serde.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
