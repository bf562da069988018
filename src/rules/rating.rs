//! End-of-game performance rating.
//!
//! Ratings come from two move-count thresholds. The classic 8-pair board
//! uses 16 and 24; other pair counts scale linearly (2x and 3x the pair
//! count) unless a game fixes its own thresholds.

use serde::{Deserialize, Serialize};

use crate::cards::Color;

/// Qualitative result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Perfect,
    Great,
    Good,
}

impl Rating {
    /// Short tag.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rating::Perfect => "Perfect",
            Rating::Great => "Great",
            Rating::Good => "Good",
        }
    }

    /// Message shown on the win screen.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Rating::Perfect => "⭐ Perfect! ⭐",
            Rating::Great => "Great Job!",
            Rating::Good => "Good Game!",
        }
    }

    /// Accent color for the message.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Rating::Perfect => Color::rgb(0xF1, 0xC4, 0x0F),
            Rating::Great => Color::rgb(0x2E, 0xCC, 0x71),
            Rating::Good => Color::rgb(0xE7, 0x4C, 0x3C),
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper move bounds (inclusive) for each rating.
///
/// Anything above `great_max` is `Good`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingThresholds {
    pub perfect_max: u32,
    pub great_max: u32,
}

impl RatingThresholds {
    /// Thresholds of the classic 8-pair board.
    pub const CLASSIC: Self = Self {
        perfect_max: 16,
        great_max: 24,
    };

    /// Create thresholds. `great_max` is raised to `perfect_max` if lower.
    #[must_use]
    pub fn new(perfect_max: u32, great_max: u32) -> Self {
        Self {
            perfect_max,
            great_max: great_max.max(perfect_max),
        }
    }

    /// Thresholds scaled to a board of `pair_count` pairs.
    ///
    /// ```
    /// use memory_match::rules::RatingThresholds;
    ///
    /// assert_eq!(RatingThresholds::scaled_for(8), RatingThresholds::CLASSIC);
    /// assert_eq!(RatingThresholds::scaled_for(2), RatingThresholds::new(4, 6));
    /// ```
    #[must_use]
    pub fn scaled_for(pair_count: usize) -> Self {
        let pairs = u32::try_from(pair_count).unwrap_or(u32::MAX);
        Self::new(pairs.saturating_mul(2), pairs.saturating_mul(3))
    }

    /// Rate a finished game.
    #[must_use]
    pub fn rate(&self, moves: u32) -> Rating {
        if moves <= self.perfect_max {
            Rating::Perfect
        } else if moves <= self.great_max {
            Rating::Great
        } else {
            Rating::Good
        }
    }
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Rate a game with the classic thresholds.
#[must_use]
pub fn rate_performance(moves: u32) -> Rating {
    RatingThresholds::CLASSIC.rate(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_boundaries() {
        assert_eq!(rate_performance(0), Rating::Perfect);
        assert_eq!(rate_performance(8), Rating::Perfect);
        assert_eq!(rate_performance(16), Rating::Perfect);
        assert_eq!(rate_performance(17), Rating::Great);
        assert_eq!(rate_performance(24), Rating::Great);
        assert_eq!(rate_performance(25), Rating::Good);
        assert_eq!(rate_performance(200), Rating::Good);
    }

    #[test]
    fn test_scaled_thresholds() {
        let small = RatingThresholds::scaled_for(2);
        assert_eq!(small.rate(4), Rating::Perfect);
        assert_eq!(small.rate(5), Rating::Great);
        assert_eq!(small.rate(7), Rating::Good);

        assert_eq!(RatingThresholds::scaled_for(8), RatingThresholds::CLASSIC);
    }

    #[test]
    fn test_new_orders_bounds() {
        let t = RatingThresholds::new(10, 5);
        assert_eq!(t.great_max, 10);
        assert_eq!(t.rate(10), Rating::Perfect);
        assert_eq!(t.rate(11), Rating::Good);
    }

    #[test]
    fn test_rating_text() {
        assert_eq!(Rating::Perfect.to_string(), "Perfect");
        assert_eq!(Rating::Great.message(), "Great Job!");
        assert_eq!(Rating::Good.color().to_string(), "#E74C3C");
    }
}
