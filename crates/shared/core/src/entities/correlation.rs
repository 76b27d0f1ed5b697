use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Classification, MarketEvent, PriceMovement};

/// Scored, classified outcome for one market event
///
/// Exactly one result exists per input event. `matched_movements` is
/// ordered by ascending time distance to the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub event: MarketEvent,
    pub matched_movements: Vec<PriceMovement>,
    /// Aggregate impact in [0, 1]
    pub impact_score: Decimal,
    pub classification: Classification,
}

impl CorrelationResult {
    /// Result for an event with nothing in its window
    pub fn unmatched(event: MarketEvent) -> Self {
        Self {
            event,
            matched_movements: Vec::new(),
            impact_score: Decimal::ZERO,
            classification: Classification::Uncorrelated,
        }
    }

    pub fn is_correlated(&self) -> bool {
        self.classification == Classification::Correlated
    }

    /// Closest matched movement, if any
    pub fn nearest_movement(&self) -> Option<&PriceMovement> {
        self.matched_movements.first()
    }
}

/// Order results by descending impact score, ties by event id
pub fn rank_by_impact(results: &mut [CorrelationResult]) {
    results.sort_by(|a, b| {
        b.impact_score
            .cmp(&a.impact_score)
            .then_with(|| a.event.id.cmp(&b.event.id))
    });
}
