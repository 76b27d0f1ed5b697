use catalyst_ports::ScoreDecay;
use chrono::Duration;
use rust_decimal::Decimal;

use crate::seconds;

/// Linear decay: `1 - distance / window`
///
/// A zero-length window only credits exact hits.
pub struct LinearDecay;

impl LinearDecay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearDecay {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreDecay for LinearDecay {
    fn name(&self) -> &str {
        "linear"
    }

    fn weight(&self, distance: Duration, window: Duration) -> Decimal {
        if distance <= Duration::zero() {
            return Decimal::ONE;
        }
        if distance > window {
            return Decimal::ZERO;
        }

        seconds(distance)
            .checked_div(seconds(window))
            .map_or(Decimal::ZERO, |ratio| (Decimal::ONE - ratio).max(Decimal::ZERO))
    }
}
