//! Game state: deck, turn, score and the `MatchGame` that owns them.

pub mod deck;
pub mod match_game;
pub mod snapshot;
pub mod stats;
pub mod turn;

pub use deck::Deck;
pub use match_game::MatchGame;
pub use snapshot::{CardView, GameSnapshot};
pub use stats::GameStats;
pub use turn::{Turn, TURN_SIZE};
