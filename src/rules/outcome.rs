//! Results of `reveal` and `resolve_turn`.

use serde::{Deserialize, Serialize};

/// What a `reveal` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed: the card was already face up, or a resolution is pending.
    Ignored,
    /// First card of the turn is now face up.
    Revealed,
    /// Second card is face up and the move was counted.
    ///
    /// The Display should call `resolve_turn` (after whatever delay it wants).
    ResolutionPending { moves: u32 },
}

impl RevealOutcome {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, RevealOutcome::ResolutionPending { .. })
    }
}

/// What resolving a completed turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The two cards matched and stay face up.
    Matched,
    /// The two cards differ and went face down again.
    NoMatch,
    /// The last pair was found.
    GameWon { moves: u32 },
}

impl TurnOutcome {
    /// Whether the turn found a pair (including the winning one).
    #[must_use]
    pub fn is_match(self) -> bool {
        !matches!(self, TurnOutcome::NoMatch)
    }
}
