//! # memory-match
//!
//! Core of a memory-matching ("concentration") card game.
//!
//! A grid of face-down cards hides pairs of symbols. Each turn the player
//! reveals two cards; a pair stays face up, anything else flips back. The
//! game ends when every pair is found and reports a move count and a rating.
//!
//! ## Design Principles
//!
//! 1. **No UI**: Rendering, layout and animation belong to a Display that
//!    drives `MatchGame`. The core never calls out.
//!
//! 2. **Synchronous**: Every operation runs to completion. The flip-back
//!    delay is the Display's business; it calls `resolve_turn` when ready.
//!
//! 3. **Input races are no-ops**: Clicking a face-up card, or any card while
//!    a turn is waiting for resolution, is ignored rather than an error.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Symbols and card instances
//! - `rules`: Turn outcomes and performance rating
//! - `game`: Deck, turn buffer, stats, snapshots and `MatchGame`

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameError, GameResult, GameRng, GameRngState};

pub use crate::cards::{Card, CardState, Color, Symbol, SymbolId};

pub use crate::rules::{rate_performance, Rating, RatingThresholds, RevealOutcome, TurnOutcome};

pub use crate::game::{CardView, Deck, GameSnapshot, GameStats, MatchGame};
