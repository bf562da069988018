//! Read model for Displays.
//!
//! A snapshot is what a player may see: face-down cards carry no symbol,
//! so a Display rendering from it cannot leak hidden cards.

use serde::{Deserialize, Serialize};

use super::stats::GameStats;
use crate::cards::{Card, CardState, Symbol};

/// What a Display may show for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub position: usize,
    pub state: CardState,
    /// Present only while the card is face up.
    pub symbol: Option<Symbol>,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            position: card.position,
            state: card.state,
            symbol: card.state.is_face_up().then(|| card.symbol.clone()),
        }
    }
}

/// Observable state of a game at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub pair_count: usize,
    pub stats: GameStats,
    /// Two cards are face up and `resolve_turn` has not been called yet.
    pub resolution_pending: bool,
    pub won: bool,
    pub cards: Vec<CardView>,
}
