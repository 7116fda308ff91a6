//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure to retrieve raw bytes from the network.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

// == Pokedex Error Enum ==
/// Unified error type for commands and the API client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The fetch collaborator failed; nothing was cached
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Bytes were retrieved but did not match the expected shape
    #[error("failed to decode response from {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was called with missing or malformed arguments
    #[error("{0}")]
    InvalidArgument(String),

    /// Console read or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/nobody".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "https://pokeapi.co/api/v2/pokemon/nobody returned HTTP 404"
        );
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: PokedexError = FetchError::Status {
            url: "u".to_string(),
            status: 500,
        }
        .into();
        assert!(matches!(err, PokedexError::Fetch(_)));
        assert_eq!(err.to_string(), "u returned HTTP 500");
    }

    #[test]
    fn test_decode_error_names_key() {
        let source = serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err();
        let err = PokedexError::Decode {
            key: "https://x/1".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("failed to decode response from https://x/1"));
    }
}
