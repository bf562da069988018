//! Cards on the board - runtime card state.
//!
//! A `Card` is one face of a pair at a fixed position. Its position never
//! changes after the deal; only its `CardState` does.
//!
//! ## State Machine
//!
//! ```text
//! Hidden --reveal--> Revealed --match--> Matched (terminal)
//!                       |
//!                       +----no match---> Hidden
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::{Symbol, SymbolId};

/// Visibility of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down, selectable.
    #[default]
    Hidden,
    /// Face up, waiting for its turn to be resolved.
    Revealed,
    /// Face up for the rest of the game.
    Matched,
}

impl CardState {
    /// Whether the symbol is visible to the player.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !matches!(self, CardState::Hidden)
    }
}

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Position in the deck, assigned at the deal.
    pub position: usize,

    /// The face of this card.
    pub symbol: Symbol,

    /// Current visibility.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(position: usize, symbol: Symbol) -> Self {
        Self {
            position,
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Identity of this card's symbol.
    #[must_use]
    pub fn symbol_id(&self) -> SymbolId {
        self.symbol.id
    }

    /// Whether this card and `other` form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.position != other.position && self.symbol == other.symbol
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn symbol(id: u32) -> Symbol {
        Symbol::new(SymbolId::new(id), format!("S{id}"), Color::rgb(0, 0, 0))
    }

    #[test]
    fn test_card_new_is_hidden() {
        let card = Card::new(3, symbol(1));

        assert_eq!(card.position, 3);
        assert_eq!(card.symbol_id(), SymbolId::new(1));
        assert!(card.is_hidden());
        assert!(!card.state.is_face_up());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(0, symbol(1));
        let b = Card::new(5, symbol(1));
        let c = Card::new(2, symbol(2));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        // A card never pairs with itself
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_face_up_states() {
        assert!(!CardState::Hidden.is_face_up());
        assert!(CardState::Revealed.is_face_up());
        assert!(CardState::Matched.is_face_up());
    }
}
