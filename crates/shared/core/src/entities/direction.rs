use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a price movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Direction implied by the sign of a price delta
    pub fn from_delta(delta: Decimal) -> Self {
        if delta > Decimal::ZERO {
            Direction::Up
        } else if delta < Decimal::ZERO {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// Returns true if a sentiment score points the other way.
    ///
    /// Neutral sentiment and flat movements never conflict.
    pub fn conflicts_with_sentiment(&self, sentiment: Decimal) -> bool {
        match self {
            Direction::Up => sentiment < Decimal::ZERO,
            Direction::Down => sentiment > Decimal::ZERO,
            Direction::Flat => false,
        }
    }

    /// Returns true if a non-neutral sentiment points the same way.
    pub fn agrees_with_sentiment(&self, sentiment: Decimal) -> bool {
        match self {
            Direction::Up => sentiment > Decimal::ZERO,
            Direction::Down => sentiment < Decimal::ZERO,
            Direction::Flat => false,
        }
    }
}
