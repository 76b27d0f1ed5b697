use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Direction, MagnitudeClass, PricePoint};
use crate::values::Timestamp;

/// A detected significant price change between two observations
///
/// Built only by the price analyzer from the first and last point of a
/// window. Movements are values: once created they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMovement {
    pub start: PricePoint,
    pub end: PricePoint,
    /// `end.value - start.value`
    pub absolute_delta: Decimal,
    /// `absolute_delta / start.value` as a fraction (0.1 = 10%)
    pub percent_delta: Decimal,
    pub direction: Direction,
    pub magnitude_class: MagnitudeClass,
}

impl PriceMovement {
    /// Create a movement spanning `start..=end`
    ///
    /// A zero start value yields a zero percent delta. Deltas beyond
    /// Decimal's range saturate at `Decimal::MAX` / `Decimal::MIN`.
    pub fn new(start: PricePoint, end: PricePoint, magnitude_class: MagnitudeClass) -> Self {
        let absolute_delta = end.value.saturating_sub(start.value);
        let percent_delta = if start.value.is_zero() {
            Decimal::ZERO
        } else {
            absolute_delta
                .checked_div(start.value)
                .unwrap_or(if absolute_delta.is_sign_negative() == start.value.is_sign_negative() {
                    Decimal::MAX
                } else {
                    Decimal::MIN
                })
        };

        Self {
            start,
            end,
            absolute_delta,
            percent_delta,
            direction: Direction::from_delta(absolute_delta),
            magnitude_class,
        }
    }

    /// Create a movement and bucket it by its absolute percent delta
    pub fn classified(
        start: PricePoint,
        end: PricePoint,
        minor_upper: Decimal,
        significant_upper: Decimal,
    ) -> Self {
        let mut movement = Self::new(start, end, MagnitudeClass::Minor);
        movement.magnitude_class =
            MagnitudeClass::classify(movement.percent_delta.abs(), minor_upper, significant_upper);
        movement
    }

    pub fn start_time(&self) -> Timestamp {
        self.start.timestamp
    }

    pub fn end_time(&self) -> Timestamp {
        self.end.timestamp
    }

    /// Time covered by the movement
    pub fn duration(&self) -> Duration {
        self.end.timestamp - self.start.timestamp
    }

    /// Returns true if `at` falls inside `[start, end]`
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start.timestamp <= at && at <= self.end.timestamp
    }

    /// Returns true if `[start, end]` intersects the closed range `[from, to]`
    pub fn intersects(&self, from: Timestamp, to: Timestamp) -> bool {
        self.start.timestamp <= to && self.end.timestamp >= from
    }

    /// Returns true if both movements share a stretch of time of positive length
    ///
    /// Movements that merely touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &PriceMovement) -> bool {
        self.start.timestamp < other.end.timestamp && other.start.timestamp < self.end.timestamp
    }

    /// Absolute time between `at` and the movement
    ///
    /// Zero when `at` lies inside the movement, otherwise the distance to
    /// the nearer endpoint.
    pub fn distance_to(&self, at: Timestamp) -> Duration {
        if at < self.start.timestamp {
            self.start.timestamp - at
        } else if at > self.end.timestamp {
            at - self.end.timestamp
        } else {
            Duration::zero()
        }
    }
}
