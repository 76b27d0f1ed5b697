use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Size bucket of a price movement, assigned by percent-delta thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeClass {
    Minor,
    Significant,
    Major,
}

impl MagnitudeClass {
    /// Bucket an absolute percent delta.
    ///
    /// `≤ minor_upper` is minor, `≤ significant_upper` is significant,
    /// anything larger is major.
    pub fn classify(abs_percent_delta: Decimal, minor_upper: Decimal, significant_upper: Decimal) -> Self {
        if abs_percent_delta <= minor_upper {
            MagnitudeClass::Minor
        } else if abs_percent_delta <= significant_upper {
            MagnitudeClass::Significant
        } else {
            MagnitudeClass::Major
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        let minor = dec!(0.02);
        let significant = dec!(0.05);

        assert_eq!(MagnitudeClass::classify(dec!(0.01), minor, significant), MagnitudeClass::Minor);
        assert_eq!(MagnitudeClass::classify(dec!(0.02), minor, significant), MagnitudeClass::Minor);
        assert_eq!(
            MagnitudeClass::classify(dec!(0.05), minor, significant),
            MagnitudeClass::Significant
        );
        assert_eq!(MagnitudeClass::classify(dec!(0.051), minor, significant), MagnitudeClass::Major);
    }

    #[test]
    fn test_ordering() {
        assert!(MagnitudeClass::Minor < MagnitudeClass::Significant);
        assert!(MagnitudeClass::Significant < MagnitudeClass::Major);
    }
}
