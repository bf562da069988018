//! Game configuration.
//!
//! A Display configures a game by providing:
//! - the number of pairs on the board
//! - a symbol pool (the first `pair_count` symbols are dealt)
//! - optionally, fixed rating thresholds and an RNG seed
//!
//! Configs are plain serde data, so they can also be shipped as TOML:
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r##"
//!     pair_count = 2
//!     seed = 7
//!
//!     [[symbols]]
//!     id = 0
//!     glyph = "A"
//!     color = "#FF0000"
//!
//!     [[symbols]]
//!     id = 1
//!     glyph = "B"
//!     color = "#0000FF"
//! "##).unwrap();
//!
//! assert_eq!(config.pair_count, 2);
//! assert_eq!(config.seed, Some(7));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Symbol;
use crate::rules::RatingThresholds;

/// Pairs on the classic 4x4 board.
pub const CLASSIC_PAIR_COUNT: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs dealt.
    pub pair_count: usize,

    /// Symbol pool. Must hold at least `pair_count` distinct symbols.
    pub symbols: Vec<Symbol>,

    /// Fixed rating thresholds. `None` scales them with `pair_count`.
    #[serde(default)]
    pub thresholds: Option<RatingThresholds>,

    /// RNG seed for reproducible deals. `None` draws from OS entropy.
    ///
    /// TOML integers stop at `i64::MAX`, so larger seeds are written as
    /// decimal strings (`seed = "18446744073709551615"`).
    #[serde(default, with = "seed_repr")]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration dealing `pair_count` pairs from `symbols`.
    ///
    /// Not validated until a game is started (or `validate` is called).
    pub fn new(pair_count: usize, symbols: impl Into<Vec<Symbol>>) -> Self {
        Self {
            pair_count,
            symbols: symbols.into(),
            thresholds: None,
            seed: None,
        }
    }

    /// The classic board: eight fruit pairs.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(CLASSIC_PAIR_COUNT, Symbol::classic_fruits())
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the rating thresholds instead of scaling them.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: RatingThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Thresholds in effect for this configuration.
    #[must_use]
    pub fn thresholds(&self) -> RatingThresholds {
        self.thresholds
            .unwrap_or_else(|| RatingThresholds::scaled_for(self.pair_count))
    }

    /// Symbols that will be dealt. Only meaningful after `validate` succeeds.
    #[must_use]
    pub fn chosen_symbols(&self) -> &[Symbol] {
        &self.symbols[..self.pair_count.min(self.symbols.len())]
    }

    /// Check that this configuration can produce a valid deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.symbols.len() < self.pair_count {
            return Err(ConfigError::NotEnoughSymbols {
                requested: self.pair_count,
                available: self.symbols.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for symbol in self.chosen_symbols() {
            if !seen.insert(symbol.id) {
                return Err(ConfigError::DuplicateSymbol(symbol.id));
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Seeds as integers when they fit in an `i64`, as strings otherwise.
mod seed_repr {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u64),
        Str(String),
    }

    pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match seed {
            Some(seed) if i64::try_from(*seed).is_err() => seed.to_string().serialize(serializer),
            _ => seed.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Int(seed)) => Ok(Some(seed)),
            Some(Repr::Str(s)) => s
                .parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("seed {s:?} is not an unsigned 64-bit integer"))),
        }
    }
}
