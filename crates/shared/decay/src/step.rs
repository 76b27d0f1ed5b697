use catalyst_ports::ScoreDecay;
use chrono::Duration;
use rust_decimal::Decimal;

/// Step decay: full weight anywhere inside the window
pub struct StepDecay;

impl StepDecay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StepDecay {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreDecay for StepDecay {
    fn name(&self) -> &str {
        "step"
    }

    fn weight(&self, distance: Duration, window: Duration) -> Decimal {
        if distance <= window || distance <= Duration::zero() {
            Decimal::ONE
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let decay = StepDecay::new();
        let window = Duration::minutes(30);

        assert_eq!(decay.weight(Duration::zero(), window), Decimal::ONE);
        assert_eq!(decay.weight(Duration::minutes(30), window), Decimal::ONE);
        assert_eq!(decay.weight(Duration::minutes(31), window), Decimal::ZERO);
    }
}
