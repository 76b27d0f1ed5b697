//! Price Analyzer Configuration

use catalyst_ports::{AnalysisError, AnalysisResult};
use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Setting keys, as named in settings files and config errors
pub mod keys {
    pub const MIN_ABSOLUTE_DELTA: &str = "price.min_absolute_delta";
    pub const MIN_PERCENT_DELTA: &str = "price.min_percent_delta";
    pub const VOLATILITY_MULTIPLIER: &str = "price.volatility_multiplier";
    pub const WINDOW_SIZE: &str = "price.window_size";
    pub const MINOR_UPPER: &str = "price.magnitude_thresholds.minor_upper";
    pub const SIGNIFICANT_UPPER: &str = "price.magnitude_thresholds.significant_upper";
}

/// How far a detection window reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSize {
    /// `n` consecutive price points (n ≥ 2)
    Points(usize),
    /// From a point to the last point no later than `start + span`
    Span(Duration),
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize::Points(2)
    }
}

/// Upper bounds (inclusive) of the minor and significant magnitude buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagnitudeThresholds {
    pub minor_upper: Decimal,
    pub significant_upper: Decimal,
}

impl Default for MagnitudeThresholds {
    fn default() -> Self {
        Self {
            minor_upper: dec!(0.02),      // up to 2% is minor
            significant_upper: dec!(0.05), // up to 5% is significant
        }
    }
}

/// Configuration for the price analyzer
///
/// A `None` threshold disables that criterion. At least one criterion must
/// stay enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceAnalyzerConfig {
    /// Minimum `|end - start|` in price units
    pub min_absolute_delta: Option<Decimal>,
    /// Minimum `|end - start| / start` as a fraction
    pub min_percent_delta: Option<Decimal>,
    /// Qualify windows moving at least this many standard deviations of the
    /// series' step returns
    pub volatility_multiplier: Option<Decimal>,
    pub window_size: WindowSize,
    pub magnitude_thresholds: MagnitudeThresholds,
}

impl Default for PriceAnalyzerConfig {
    fn default() -> Self {
        Self {
            min_absolute_delta: None,
            min_percent_delta: Some(dec!(0.01)),
            volatility_multiplier: None,
            window_size: WindowSize::default(),
            magnitude_thresholds: MagnitudeThresholds::default(),
        }
    }
}

impl PriceAnalyzerConfig {
    /// Reject values the analyzer cannot work with
    pub fn validate(&self) -> AnalysisResult<()> {
        if let Some(min) = self.min_absolute_delta {
            ensure_non_negative(keys::MIN_ABSOLUTE_DELTA, min)?;
        }
        if let Some(min) = self.min_percent_delta {
            ensure_non_negative(keys::MIN_PERCENT_DELTA, min)?;
        }
        if let Some(multiplier) = self.volatility_multiplier {
            if multiplier <= Decimal::ZERO {
                return Err(AnalysisError::invalid_config(
                    keys::VOLATILITY_MULTIPLIER,
                    format!("must be positive, got {}", multiplier),
                ));
            }
        }
        if self.min_absolute_delta.is_none()
            && self.min_percent_delta.is_none()
            && self.volatility_multiplier.is_none()
        {
            return Err(AnalysisError::invalid_config(
                keys::MIN_PERCENT_DELTA,
                "every detection criterion is disabled",
            ));
        }

        match self.window_size {
            WindowSize::Points(n) if n < 2 => {
                return Err(AnalysisError::invalid_config(
                    keys::WINDOW_SIZE,
                    format!("a window needs at least 2 points, got {}", n),
                ));
            }
            WindowSize::Span(span) if span <= Duration::zero() => {
                return Err(AnalysisError::invalid_config(
                    keys::WINDOW_SIZE,
                    format!("window span must be positive, got {}s", span.num_seconds()),
                ));
            }
            _ => {}
        }

        let thresholds = &self.magnitude_thresholds;
        ensure_non_negative(keys::MINOR_UPPER, thresholds.minor_upper)?;
        if thresholds.significant_upper < thresholds.minor_upper {
            return Err(AnalysisError::invalid_config(
                keys::SIGNIFICANT_UPPER,
                format!(
                    "must not be below minor_upper ({} < {})",
                    thresholds.significant_upper, thresholds.minor_upper
                ),
            ));
        }

        Ok(())
    }
}

fn ensure_non_negative(key: &str, value: Decimal) -> AnalysisResult<()> {
    if value < Decimal::ZERO {
        return Err(AnalysisError::invalid_config(
            key,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}
