//! Turn outcomes and performance rating.
//!
//! Pure rule types with no game state: what a reveal or a resolution
//! reports, and how a finished game's move count is rated.

pub mod outcome;
pub mod rating;

pub use outcome::{RevealOutcome, TurnOutcome};
pub use rating::{rate_performance, Rating, RatingThresholds};
