//! Pokemon detail payload.

use serde::Deserialize;

use super::NamedResource;

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Missing for a handful of forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [{"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "types": [{"slot": 1, "type": {"name": "normal", "url": "u"}}]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.types[0].kind.name, "normal");
    }

    #[test]
    fn test_null_base_experience() {
        let json = r#"{"name": "x", "base_experience": null, "height": 1, "weight": 1}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert!(pokemon.base_experience.is_none());
        assert!(pokemon.stats.is_empty());
    }
}
