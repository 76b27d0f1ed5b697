use catalyst_ports::ScoreDecay;
use chrono::Duration;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::seconds;

/// ln(2), enough digits for Decimal's 28 significant places
const LN_2: Decimal = dec!(0.6931471805599453094172321215);

/// Beyond this many half-lives the weight is below 1e-18 and treated as zero
const MAX_HALF_LIVES: Decimal = dec!(60);

/// Exponential decay: the weight halves every `half_life`
///
/// Matches outside the window contribute nothing regardless of half-life.
pub struct ExponentialDecay {
    half_life: Duration,
}

impl ExponentialDecay {
    pub fn new(half_life: Duration) -> Self {
        Self { half_life }
    }

    pub fn half_life(&self) -> Duration {
        self.half_life
    }
}

impl ScoreDecay for ExponentialDecay {
    fn name(&self) -> &str {
        "exponential"
    }

    fn weight(&self, distance: Duration, window: Duration) -> Decimal {
        if distance <= Duration::zero() {
            return Decimal::ONE;
        }
        if distance > window || self.half_life <= Duration::zero() {
            return Decimal::ZERO;
        }

        let half_lives = match seconds(distance).checked_div(seconds(self.half_life)) {
            Some(n) if n <= MAX_HALF_LIVES => n,
            _ => return Decimal::ZERO,
        };

        (-(LN_2 * half_lives))
            .checked_exp()
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, Decimal::ONE)
    }
}
