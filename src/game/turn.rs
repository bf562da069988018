//! The cards revealed in the current, unresolved turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Cards revealed per turn.
pub const TURN_SIZE: usize = 2;

/// Bounded buffer of revealed-but-unresolved card positions.
///
/// Holds at most `TURN_SIZE` entries; `push` refuses more.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    revealed: SmallVec<[usize; TURN_SIZE]>,
}

impl Turn {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a revealed card. Returns `false` if the turn is already full.
    #[must_use]
    pub fn push(&mut self, index: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.revealed.push(index);
        true
    }

    /// Both cards of the turn, once it is complete.
    #[must_use]
    pub fn pair(&self) -> Option<(usize, usize)> {
        match self.revealed.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Whether the turn is waiting for resolution.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.revealed.len() >= TURN_SIZE
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.revealed
    }

    pub fn clear(&mut self) {
        self.revealed.clear();
    }
}
