//! Error types.
//!
//! Only programmer misuse is an error: a bad setup (`InvalidConfig`) or an
//! out-of-range card reference (`InvalidIndex`). Late or duplicate player
//! input is absorbed as a no-op by the game itself.

use thiserror::Error;

use crate::cards::SymbolId;

/// Errors returned by `MatchGame` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Setup parameters cannot produce a valid deck.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A card position outside the deck.
    #[error("card index {index} out of range for deck of {len} cards")]
    InvalidIndex { index: usize, len: usize },
}

/// Why a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pair count must be at least 1")]
    NoPairs,

    #[error("{requested} pairs requested but only {available} symbols available")]
    NotEnoughSymbols { requested: usize, available: usize },

    #[error("symbol {0} appears more than once in the pool")]
    DuplicateSymbol(SymbolId),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convenience alias for results in this crate.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidIndex { index: 20, len: 16 };
        assert_eq!(err.to_string(), "card index 20 out of range for deck of 16 cards");

        let err: GameError = ConfigError::NotEnoughSymbols {
            requested: 9,
            available: 8,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid game configuration: 9 pairs requested but only 8 symbols available"
        );
    }

    #[test]
    fn test_duplicate_symbol_message() {
        let err = ConfigError::DuplicateSymbol(SymbolId::new(3));
        assert_eq!(err.to_string(), "symbol Symbol(3) appears more than once in the pool");
    }
}
