//! The deck: every card on the board, in position order.
//!
//! Invariant: each symbol in play is printed on exactly two cards, and
//! `cards[i].position == i`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardState, Symbol, SymbolId};
use crate::core::{ConfigError, GameRng};

/// Ordered cards of one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal each symbol twice and shuffle.
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        let mut faces: Vec<Symbol> = symbols.iter().chain(symbols).cloned().collect();
        rng.shuffle(&mut faces);
        Self::place(faces)
    }

    /// Lay out cards in a fixed order of symbol ids.
    ///
    /// `layout` must use every symbol of `symbols` exactly twice and nothing else.
    pub fn from_layout(symbols: &[Symbol], layout: &[SymbolId]) -> Result<Self, ConfigError> {
        if layout.len() != symbols.len() * 2 {
            return Err(ConfigError::InvalidLayout(format!(
                "expected {} cards, got {}",
                symbols.len() * 2,
                layout.len()
            )));
        }

        let by_id: FxHashMap<SymbolId, &Symbol> = symbols.iter().map(|s| (s.id, s)).collect();
        let mut faces = Vec::with_capacity(layout.len());
        for id in layout {
            let symbol = by_id
                .get(id)
                .ok_or_else(|| ConfigError::InvalidLayout(format!("{id} is not in play")))?;
            faces.push((*symbol).clone());
        }

        let deck = Self::place(faces);
        if let Some((id, count)) = deck.symbol_counts().into_iter().find(|&(_, n)| n != 2) {
            return Err(ConfigError::InvalidLayout(format!(
                "{id} appears {count} times, expected 2"
            )));
        }
        Ok(deck)
    }

    fn place(faces: Vec<Symbol>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card::new(position, symbol))
            .collect();
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in position order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn set_state(&mut self, index: usize, state: CardState) {
        self.cards[index].state = state;
    }

    /// How many cards show each symbol.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol_id()).or_insert(0) += 1;
        }
        counts
    }

    /// Count cards in a given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn pool(n: u32) -> Vec<Symbol> {
        (0..n)
            .map(|i| Symbol::new(SymbolId::new(i), format!("S{i}"), Color::rgb(0, 0, 0)))
            .collect()
    }

    #[test]
    fn test_deal_pairs_every_symbol() {
        let mut rng = GameRng::new(42);
        let deck = Deck::deal(&pool(8), &mut rng);

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.count_in_state(CardState::Hidden), 16);

        let counts = deck.symbol_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&n| n == 2));

        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.position, i);
        }
    }

    #[test]
    fn test_deal_is_seeded() {
        let a = Deck::deal(&pool(8), &mut GameRng::new(7));
        let b = Deck::deal(&pool(8), &mut GameRng::new(7));
        let c = Deck::deal(&pool(8), &mut GameRng::new(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_layout() {
        let symbols = pool(2);
        let ids = [SymbolId::new(0), SymbolId::new(1), SymbolId::new(0), SymbolId::new(1)];
        let deck = Deck::from_layout(&symbols, &ids).unwrap();

        let laid: Vec<_> = deck.cards().iter().map(Card::symbol_id).collect();
        assert_eq!(laid, ids);
    }

    #[test]
    fn test_from_layout_rejects_bad_layouts() {
        let symbols = pool(2);
        let a = SymbolId::new(0);
        let b = SymbolId::new(1);

        // Wrong length
        assert!(Deck::from_layout(&symbols, &[a, a, b]).is_err());
        // Unknown symbol
        assert!(Deck::from_layout(&symbols, &[a, a, b, SymbolId::new(9)]).is_err());
        // Right length, wrong multiplicity
        assert!(matches!(
            Deck::from_layout(&symbols, &[a, a, a, b]),
            Err(ConfigError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_set_state() {
        let mut deck = Deck::deal(&pool(2), &mut GameRng::new(1));
        deck.set_state(0, CardState::Matched);

        assert!(deck.get(0).unwrap().is_matched());
        assert_eq!(deck.count_in_state(CardState::Hidden), 3);
        assert!(deck.get(4).is_none());
    }
}
