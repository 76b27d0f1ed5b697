//! Merging of overlapping movements
//!
//! Overlapping windows report the same price action more than once. Two
//! movements are merged when their time ranges share a stretch of positive
//! length and they move in the same direction; the one with the larger
//! absolute delta survives. Equal deltas keep the earlier start, then the
//! earlier end.

use catalyst_core::PriceMovement;
use std::cmp::Ordering;

/// Collapse overlapping same-direction movements
///
/// Output is ascending by start timestamp (then end timestamp).
pub fn merge_overlapping(candidates: Vec<PriceMovement>) -> Vec<PriceMovement> {
    let mut by_strength = candidates;
    by_strength.sort_by(strength_order);

    let mut kept: Vec<PriceMovement> = Vec::with_capacity(by_strength.len());
    for candidate in by_strength {
        let subsumed = kept
            .iter()
            .any(|m| m.direction == candidate.direction && m.overlaps(&candidate));
        if !subsumed {
            kept.push(candidate);
        }
    }

    kept.sort_by(|a, b| {
        a.start
            .timestamp
            .cmp(&b.start.timestamp)
            .then_with(|| a.end.timestamp.cmp(&b.end.timestamp))
    });
    kept
}

/// Largest absolute delta first, ties broken by earlier start then earlier end
fn strength_order(a: &PriceMovement, b: &PriceMovement) -> Ordering {
    b.absolute_delta
        .abs()
        .cmp(&a.absolute_delta.abs())
        .then_with(|| a.start.timestamp.cmp(&b.start.timestamp))
        .then_with(|| a.end.timestamp.cmp(&b.end.timestamp))
}
