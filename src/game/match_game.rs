//! The game itself: deck, turn and score behind a small set of operations.
//!
//! A Display drives a `MatchGame` like this:
//!
//! ```
//! use memory_match::{GameConfig, MatchGame, RevealOutcome, TurnOutcome};
//!
//! let mut game = MatchGame::new(GameConfig::classic().with_seed(1)).unwrap();
//!
//! game.reveal(0).unwrap();
//! if let RevealOutcome::ResolutionPending { .. } = game.reveal(1).unwrap() {
//!     // ...show both cards for a moment, then:
//!     let outcome = game.resolve_turn().unwrap();
//!     assert!(matches!(outcome, TurnOutcome::Matched | TurnOutcome::NoMatch));
//! }
//! assert_eq!(game.stats().moves, 1);
//! ```

use tracing::{debug, instrument, trace};

use super::deck::Deck;
use super::snapshot::{CardView, GameSnapshot};
use super::stats::GameStats;
use super::turn::Turn;
use crate::cards::{Card, CardState, Symbol, SymbolId};
use crate::core::{GameConfig, GameError, GameResult, GameRng, GameRngState};
use crate::rules::{Rating, RevealOutcome, TurnOutcome};

/// A memory-matching game.
///
/// All operations run to completion synchronously. The pause before
/// non-matching cards flip back belongs to the caller, which decides when
/// to call [`MatchGame::resolve_turn`].
#[derive(Clone, Debug)]
pub struct MatchGame {
    config: GameConfig,
    deck: Deck,
    turn: Turn,
    stats: GameStats,
    rng: GameRng,
}

impl MatchGame {
    /// Start a game from a configuration.
    ///
    /// Fails with `InvalidConfig` if the configuration cannot produce a deck.
    #[instrument(skip_all, fields(pair_count = config.pair_count))]
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::deal(config.chosen_symbols(), &mut rng);
        debug!(seed = rng.seed(), cards = deck.len(), "dealt new game");

        Ok(Self {
            config,
            deck,
            turn: Turn::new(),
            stats: GameStats::default(),
            rng,
        })
    }

    /// Start a game with a fixed card arrangement instead of a shuffle.
    ///
    /// `layout[i]` is the symbol at position `i`. `restart` shuffles as usual.
    #[instrument(skip_all, fields(pair_count = config.pair_count, cards = layout.len()))]
    pub fn with_layout(config: GameConfig, layout: &[SymbolId]) -> GameResult<Self> {
        config.validate()?;

        let deck = Deck::from_layout(config.chosen_symbols(), layout)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(seed = rng.seed(), cards = deck.len(), "laid out fixed game");

        Ok(Self {
            config,
            deck,
            turn: Turn::new(),
            stats: GameStats::default(),
            rng,
        })
    }

    /// Deal a fresh game of `pair_count` pairs from `symbol_pool`.
    ///
    /// Keeps this game's threshold policy and RNG stream. On error the
    /// current game is left as it was.
    #[instrument(skip(self, symbol_pool))]
    pub fn new_game(&mut self, pair_count: usize, symbol_pool: impl Into<Vec<Symbol>>) -> GameResult<()> {
        let config = GameConfig {
            pair_count,
            symbols: symbol_pool.into(),
            thresholds: self.config.thresholds,
            seed: self.config.seed,
        };
        config.validate()?;

        self.config = config;
        self.deal();
        Ok(())
    }

    /// Deal again with the same pair count and symbol pool.
    #[instrument(skip(self), fields(pair_count = self.config.pair_count))]
    pub fn restart(&mut self) {
        self.deal();
    }

    fn deal(&mut self) {
        self.deck = Deck::deal(self.config.chosen_symbols(), &mut self.rng);
        self.turn.clear();
        self.stats = GameStats::default();
        debug!(cards = self.deck.len(), "dealt");
    }

    /// Flip card `index` face up.
    ///
    /// Revealing a card that is already face up, or any card while a
    /// resolution is pending, is ignored.
    pub fn reveal(&mut self, index: usize) -> GameResult<RevealOutcome> {
        let hidden = self.card(index)?.is_hidden();
        if !hidden || self.turn.is_full() {
            trace!(index, hidden, pending = self.turn.is_full(), "reveal ignored");
            return Ok(RevealOutcome::Ignored);
        }

        self.deck.set_state(index, CardState::Revealed);
        let pushed = self.turn.push(index);
        debug_assert!(pushed, "turn buffer overflow at {index}");

        if self.turn.is_full() {
            self.stats.moves += 1;
            debug!(index, moves = self.stats.moves, "turn complete");
            Ok(RevealOutcome::ResolutionPending {
                moves: self.stats.moves,
            })
        } else {
            trace!(index, "first card revealed");
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Resolve a completed turn.
    ///
    /// Returns `None` when no turn is pending (a late or duplicate timer).
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_turn(&mut self) -> Option<TurnOutcome> {
        let (first, second) = self.turn.pair()?;
        self.turn.clear();

        let cards = self.deck.cards();
        if !cards[first].pairs_with(&cards[second]) {
            self.deck.set_state(first, CardState::Hidden);
            self.deck.set_state(second, CardState::Hidden);
            debug!(first, second, "no match");
            return Some(TurnOutcome::NoMatch);
        }

        self.deck.set_state(first, CardState::Matched);
        self.deck.set_state(second, CardState::Matched);
        self.stats.matched_pairs += 1;

        if self.stats.matched_pairs == self.config.pair_count {
            debug!(moves = self.stats.moves, "game won");
            Some(TurnOutcome::GameWon {
                moves: self.stats.moves,
            })
        } else {
            debug!(first, second, matched_pairs = self.stats.matched_pairs, "match");
            Some(TurnOutcome::Matched)
        }
    }

    /// Rate a move count with this game's thresholds.
    #[must_use]
    pub fn rate_performance(&self, moves: u32) -> Rating {
        self.config.thresholds().rate(moves)
    }

    /// Rating of the finished game, if it is finished.
    #[must_use]
    pub fn final_rating(&self) -> Option<Rating> {
        self.is_won().then(|| self.rate_performance(self.stats.moves))
    }

    // === Queries ===

    /// Card at `index`.
    pub fn card(&self, index: usize) -> GameResult<&Card> {
        self.deck.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.deck.len(),
        })
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Positions revealed in the current turn.
    #[must_use]
    pub fn turn(&self) -> &[usize] {
        self.turn.as_slice()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.config.pair_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_resolution_pending(&self) -> bool {
        self.turn.is_full()
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.stats.matched_pairs == self.config.pair_count
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.config.pair_count - self.stats.matched_pairs
    }

    /// The symbols dealt in this game, in pool order.
    #[must_use]
    pub fn symbols_in_play(&self) -> &[Symbol] {
        self.config.chosen_symbols()
    }

    /// RNG position, for replaying the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// What a player may currently see.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pair_count: self.config.pair_count,
            stats: self.stats,
            resolution_pending: self.is_resolution_pending(),
            won: self.is_won(),
            cards: self.deck.cards().iter().map(CardView::from).collect(),
        }
    }
}
