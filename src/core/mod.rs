//! Core engine types: configuration, errors, RNG.
//!
//! Everything here is independent of the board itself. Games are set up
//! via `GameConfig` rather than by editing the game module.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, CLASSIC_PAIR_COUNT};
pub use error::{ConfigError, GameError, GameResult};
pub use rng::{GameRng, GameRngState};
