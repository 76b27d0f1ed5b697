//! Event Analyzer Configuration

use catalyst_core::{Classification, MagnitudeClass};
use catalyst_decay::DecayKind;
use catalyst_ports::{AnalysisError, AnalysisResult};
use chrono::Duration;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Setting keys, as named in settings files and config errors
pub mod keys {
    pub const WINDOW_BEFORE: &str = "event.window_before";
    pub const WINDOW_AFTER: &str = "event.window_after";
    pub const SCORE_DECAY: &str = "event.score_decay";
    pub const CORRELATED_THRESHOLD: &str = "event.correlated_threshold";
    pub const WEAK_THRESHOLD: &str = "event.weak_threshold";
    pub const MAGNITUDE_WEIGHTS: &str = "event.magnitude_weights";
    pub const CATEGORY_WEIGHTS: &str = "event.category_weights";
    pub const SENTIMENT_MISMATCH_FACTOR: &str = "event.sentiment_mismatch_factor";
    pub const SENTIMENT_AGREEMENT_SCALING: &str = "event.sentiment_agreement_scaling";
}

/// Contribution of each magnitude class before decay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnitudeWeights {
    pub minor: Decimal,
    pub significant: Decimal,
    pub major: Decimal,
}

impl Default for MagnitudeWeights {
    fn default() -> Self {
        Self {
            minor: dec!(0.3),
            significant: dec!(0.6),
            major: dec!(1.0),
        }
    }
}

impl MagnitudeWeights {
    pub fn weight(&self, class: MagnitudeClass) -> Decimal {
        match class {
            MagnitudeClass::Minor => self.minor,
            MagnitudeClass::Significant => self.significant,
            MagnitudeClass::Major => self.major,
        }
    }
}

/// Configuration for the event analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventAnalyzerConfig {
    /// How far before an event a movement may lie and still match
    pub window_before: Duration,
    /// How far after an event a movement may lie and still match
    pub window_after: Duration,
    pub score_decay: DecayKind,
    /// Score at or above which an event is correlated
    pub correlated_threshold: Decimal,
    /// Score at or above which an event is weakly correlated
    pub weak_threshold: Decimal,
    pub magnitude_weights: MagnitudeWeights,
    /// Multiplier per event category; categories not listed weigh 1
    pub category_weights: HashMap<String, Decimal>,
    /// Multiplier for a movement against the event's sentiment (1 = ignore sentiment)
    pub sentiment_mismatch_factor: Decimal,
    /// Scale a movement that agrees with the event's sentiment by `|sentiment|`
    pub sentiment_agreement_scaling: bool,
}

impl Default for EventAnalyzerConfig {
    fn default() -> Self {
        Self {
            window_before: Duration::hours(24),
            window_after: Duration::hours(24),
            score_decay: DecayKind::Linear,
            correlated_threshold: dec!(0.5),
            weak_threshold: dec!(0.2),
            magnitude_weights: MagnitudeWeights::default(),
            category_weights: HashMap::new(),
            sentiment_mismatch_factor: Decimal::ONE,
            sentiment_agreement_scaling: false,
        }
    }
}

impl EventAnalyzerConfig {
    /// Reject values the analyzer cannot work with
    pub fn validate(&self) -> AnalysisResult<()> {
        ensure_window(keys::WINDOW_BEFORE, self.window_before)?;
        ensure_window(keys::WINDOW_AFTER, self.window_after)?;

        if let DecayKind::Exponential { half_life } = self.score_decay {
            if half_life <= Duration::zero() {
                return Err(AnalysisError::invalid_config(
                    keys::SCORE_DECAY,
                    "exponential half_life must be positive",
                ));
            }
        }

        ensure_unit_interval(keys::CORRELATED_THRESHOLD, self.correlated_threshold)?;
        ensure_unit_interval(keys::WEAK_THRESHOLD, self.weak_threshold)?;
        if self.weak_threshold > self.correlated_threshold {
            return Err(AnalysisError::invalid_config(
                keys::WEAK_THRESHOLD,
                format!(
                    "must not exceed correlated_threshold ({} > {})",
                    self.weak_threshold, self.correlated_threshold
                ),
            ));
        }

        let weights = &self.magnitude_weights;
        for (class, weight) in [
            ("minor", weights.minor),
            ("significant", weights.significant),
            ("major", weights.major),
        ] {
            if weight < Decimal::ZERO {
                return Err(AnalysisError::invalid_config(
                    format!("{}.{}", keys::MAGNITUDE_WEIGHTS, class),
                    format!("must not be negative, got {}", weight),
                ));
            }
        }

        if let Some((category, weight)) = self
            .category_weights
            .iter()
            .find(|(_, w)| **w < Decimal::ZERO)
        {
            return Err(AnalysisError::invalid_config(
                format!("{}.{}", keys::CATEGORY_WEIGHTS, category),
                format!("must not be negative, got {}", weight),
            ));
        }

        ensure_unit_interval(keys::SENTIMENT_MISMATCH_FACTOR, self.sentiment_mismatch_factor)?;
        Ok(())
    }

    /// Classify an impact score
    pub fn classify(&self, impact_score: Decimal) -> Classification {
        if impact_score >= self.correlated_threshold {
            Classification::Correlated
        } else if impact_score >= self.weak_threshold {
            Classification::Weak
        } else {
            Classification::Uncorrelated
        }
    }

    /// Weight applied to every match of an event in `category`
    pub fn category_weight(&self, category: &str) -> Decimal {
        self.category_weights
            .get(category)
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}

fn ensure_window(key: &str, window: Duration) -> AnalysisResult<()> {
    if window < Duration::zero() {
        return Err(AnalysisError::invalid_config(
            key,
            format!("window must not be negative, got {}s", window.num_seconds()),
        ));
    }
    Ok(())
}

fn ensure_unit_interval(key: &str, value: Decimal) -> AnalysisResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(AnalysisError::invalid_config(
            key,
            format!("must be within [0, 1], got {}", value),
        ));
    }
    Ok(())
}
