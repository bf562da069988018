//! Symbols - what a card shows when it is face up.
//!
//! A `Symbol` is an opaque `SymbolId` plus display attributes (a glyph and
//! a color). The game only ever compares ids; glyph and color are carried
//! through for the Display.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// An RGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Failure to parse a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a color like #RRGGBB, got {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| err());
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A card face.
///
/// Equality and hashing use `id` only: two symbols with the same id are the
/// same symbol even if their glyph or color differ.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    /// Identity used for matching.
    pub id: SymbolId,

    /// What the Display draws (for example an emoji).
    pub glyph: String,

    /// Display color for the glyph.
    pub color: Color,
}

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub fn new(id: SymbolId, glyph: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            glyph: glyph.into(),
            color,
        }
    }

    /// The eight fruit symbols of the classic 4x4 board.
    ///
    /// Apple and watermelon share a color; they still never match.
    #[must_use]
    pub fn classic_fruits() -> Vec<Symbol> {
        const FRUITS: [(&str, Color); 8] = [
            ("🍎", Color::rgb(0xFF, 0x6B, 0x6B)),
            ("🍌", Color::rgb(0xFF, 0xD9, 0x3D)),
            ("🍓", Color::rgb(0xFF, 0x6B, 0x9D)),
            ("🍇", Color::rgb(0x9B, 0x59, 0xB6)),
            ("🍉", Color::rgb(0xFF, 0x6B, 0x6B)),
            ("🍒", Color::rgb(0xE7, 0x4C, 0x3C)),
            ("🍊", Color::rgb(0xF3, 0x9C, 0x12)),
            ("🥝", Color::rgb(0xA3, 0xCB, 0x38)),
        ];

        FRUITS
            .iter()
            .enumerate()
            .map(|(i, (glyph, color))| Symbol::new(SymbolId::new(i as u32), *glyph, *color))
            .collect()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id() {
        let id = SymbolId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Symbol(5)");
    }

    #[test]
    fn test_color_parse_and_display() {
        let color: Color = "#ff6b9d".parse().unwrap();
        assert_eq!(color, Color::rgb(0xFF, 0x6B, 0x9D));
        assert_eq!(color.to_string(), "#FF6B9D");
    }

    #[test]
    fn test_color_parse_rejects_garbage() {
        assert!("FF6B9D".parse::<Color>().is_err());
        assert!("#FF6B9".parse::<Color>().is_err());
        assert!("#GG6B9D".parse::<Color>().is_err());
        assert!("#FF6B9DAA".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(0x27, 0xAE, 0x60)).unwrap();
        assert_eq!(json, "\"#27AE60\"");

        let color: Color = serde_json::from_str("\"#27AE60\"").unwrap();
        assert_eq!(color, Color::rgb(0x27, 0xAE, 0x60));

        assert!(serde_json::from_str::<Color>("\"green\"").is_err());
    }

    #[test]
    fn test_symbol_equality_by_id_only() {
        let a = Symbol::new(SymbolId::new(1), "A", Color::rgb(0, 0, 0));
        let a_restyled = Symbol::new(SymbolId::new(1), "a", Color::rgb(255, 255, 255));
        let b = Symbol::new(SymbolId::new(2), "A", Color::rgb(0, 0, 0));

        assert_eq!(a, a_restyled);
        assert_ne!(a, b);
    }

    #[test]
    fn test_classic_fruits() {
        let fruits = Symbol::classic_fruits();
        assert_eq!(fruits.len(), 8);

        // Same color, different symbols
        assert_eq!(fruits[0].color, fruits[4].color);
        assert_ne!(fruits[0], fruits[4]);

        let mut ids: Vec<_> = fruits.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
