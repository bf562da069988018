//! Score counters.

use serde::{Deserialize, Serialize};

/// Moves and found pairs for the current game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStats {
    /// Completed two-card turns.
    pub moves: u32,
    /// Pairs found so far.
    pub matched_pairs: usize,
}

impl GameStats {
    /// `Pairs: found/total` label shown in the header.
    #[must_use]
    pub fn pairs_label(&self, pair_count: usize) -> String {
        format!("Pairs: {}/{}", self.matched_pairs, pair_count)
    }

    /// `Moves: n` label shown in the header.
    #[must_use]
    pub fn moves_label(&self) -> String {
        format!("Moves: {}", self.moves)
    }
}
