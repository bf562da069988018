//! Card faces and card instances.
//!
//! ## Symbol vs Card
//!
//! - `Symbol`: what is printed on a card (identity plus glyph and color)
//! - `Card`: one placed card with a position and a `CardState`
//!
//! Every symbol in play is printed on exactly two cards.

pub mod instance;
pub mod symbol;

pub use instance::{Card, CardState};
pub use symbol::{Color, ColorParseError, Symbol, SymbolId};
