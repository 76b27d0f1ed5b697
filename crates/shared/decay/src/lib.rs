//! Catalyst Decay Functions
//!
//! Implementations of the [`ScoreDecay`] port used to weight event/movement
//! matches by their distance in time.

mod exponential;
mod linear;
mod step;

pub use exponential::ExponentialDecay;
pub use linear::LinearDecay;
pub use step::StepDecay;

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export the trait from ports for convenience
pub use catalyst_ports::ScoreDecay;

/// Configurable decay shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DecayKind {
    /// Falls linearly from 1 at the event to 0 at the window edge
    #[default]
    Linear,
    /// Halves every `half_life`, cut to 0 outside the window
    Exponential {
        #[serde(with = "duration_secs")]
        half_life: Duration,
    },
    /// Full weight anywhere inside the window
    Step,
}

/// Factory function to create a decay function from its configured kind
pub fn create_decay(kind: &DecayKind) -> Box<dyn ScoreDecay> {
    match kind {
        DecayKind::Linear => Box::new(LinearDecay::new()),
        DecayKind::Exponential { half_life } => Box::new(ExponentialDecay::new(*half_life)),
        DecayKind::Step => Box::new(StepDecay::new()),
    }
}

/// Exact length of `d` in seconds, down to the nanosecond
pub(crate) fn seconds(d: Duration) -> Decimal {
    Decimal::from(d.num_seconds()) + Decimal::new(i64::from(d.subsec_nanos()), 9)
}

/// Durations serialize as whole seconds
mod duration_secs {
    use chrono::Duration;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Duration::try_seconds(secs)
            .ok_or_else(|| D::Error::custom(format!("{} seconds is out of range", secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_factory() {
        assert_eq!(create_decay(&DecayKind::Linear).name(), "linear");
        assert_eq!(create_decay(&DecayKind::Step).name(), "step");

        let exp = create_decay(&DecayKind::Exponential {
            half_life: Duration::minutes(30),
        });
        assert_eq!(exp.name(), "exponential");
    }

    #[test]
    fn test_seconds_keep_sub_millisecond_precision() {
        assert_eq!(seconds(Duration::microseconds(500)), dec!(0.0005));
        assert_eq!(seconds(Duration::nanoseconds(1)), dec!(0.000000001));
        assert_eq!(seconds(Duration::minutes(2)), dec!(120));
    }

    #[test]
    fn test_half_life_out_of_range_rejected() {
        let parsed: Result<DecayKind, _> =
            serde_json::from_str(r#"{"kind": "exponential", "half_life": 9223372036854775807}"#);
        assert!(parsed.is_err());

        let parsed: DecayKind =
            serde_json::from_str(r#"{"kind": "exponential", "half_life": 90}"#).unwrap();
        assert_eq!(
            parsed,
            DecayKind::Exponential {
                half_life: Duration::seconds(90)
            }
        );
    }

    #[test]
    fn test_every_kind_is_full_weight_at_zero_and_nothing_outside() {
        let kinds = [
            DecayKind::Linear,
            DecayKind::Step,
            DecayKind::Exponential {
                half_life: Duration::minutes(10),
            },
        ];
        let window = Duration::hours(1);

        for kind in kinds {
            let decay = create_decay(&kind);
            assert_eq!(decay.weight(Duration::zero(), window), Decimal::ONE, "{:?}", kind);
            assert_eq!(
                decay.weight(Duration::minutes(61), window),
                Decimal::ZERO,
                "{:?}",
                kind
            );
        }
    }
}
