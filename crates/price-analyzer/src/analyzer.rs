//! Price Analyzer
//!
//! Turns a sorted price series into the list of significant movements.

use catalyst_core::{PriceMovement, PricePoint};
use catalyst_diagnostics::NullRecorder;
use catalyst_ports::{
    AnalysisError, AnalysisResult, AnalysisStage, DiagnosticEvent, DiagnosticsRecorder,
};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::config::PriceAnalyzerConfig;
use crate::merge::merge_overlapping;
use crate::volatility::step_return_volatility;
use crate::window::{collapse_duplicate_timestamps, window_bounds};

/// Fewest price points a series can have
pub const MIN_PRICE_POINTS: usize = 2;

const SERIES_NAME: &str = "price series";

/// Detects significant price movements
///
/// Stateless between calls: the same input and config always produce the
/// same movements.
pub struct PriceAnalyzer {
    config: PriceAnalyzerConfig,
    recorder: Arc<dyn DiagnosticsRecorder>,
}

impl PriceAnalyzer {
    /// Create an analyzer, validating the configuration up front
    pub fn new(config: PriceAnalyzerConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            recorder: Arc::new(NullRecorder::new()),
        })
    }

    /// Builder: Send diagnostics to `recorder`
    pub fn with_recorder(mut self, recorder: Arc<dyn DiagnosticsRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Get the analyzer configuration
    pub fn config(&self) -> &PriceAnalyzerConfig {
        &self.config
    }

    /// Detect movements in `prices`
    ///
    /// Fails fast on fewer than two points, out-of-order timestamps or
    /// non-positive prices. Equal timestamps are allowed; the later point
    /// wins. An empty result means nothing crossed a threshold.
    pub fn analyze(&self, prices: &[PricePoint]) -> AnalysisResult<Vec<PriceMovement>> {
        self.recorder.record(&DiagnosticEvent::StageStarted {
            stage: AnalysisStage::Price,
            inputs: prices.len(),
        });

        let series = match validate_series(prices) {
            Ok(()) => collapse_duplicate_timestamps(prices),
            Err(e) => return Err(self.reject(e)),
        };
        if series.len() < MIN_PRICE_POINTS {
            return Err(self.reject(AnalysisError::InsufficientData {
                required: MIN_PRICE_POINTS,
                actual: series.len(),
            }));
        }

        let volatility_threshold = self.volatility_threshold(&series);
        let thresholds = self.config.magnitude_thresholds;

        let candidates: Vec<PriceMovement> = window_bounds(&series, self.config.window_size)
            .into_iter()
            .map(|(first, last)| {
                PriceMovement::classified(
                    series[first],
                    series[last],
                    thresholds.minor_upper,
                    thresholds.significant_upper,
                )
            })
            .filter(|m| self.qualifies(m, volatility_threshold))
            .collect();
        let candidate_count = candidates.len();

        let movements = merge_overlapping(candidates);
        debug!(
            "Price analysis: {} points, {} candidates, {} movements",
            series.len(),
            candidate_count,
            movements.len()
        );

        self.recorder.record(&DiagnosticEvent::MovementsDetected {
            candidates: candidate_count,
            count: movements.len(),
        });
        Ok(movements)
    }

    /// Does a window's movement cross any enabled threshold?
    fn qualifies(&self, movement: &PriceMovement, volatility_threshold: Option<Decimal>) -> bool {
        let abs_delta = movement.absolute_delta.abs();
        let abs_percent = movement.percent_delta.abs();

        self.config
            .min_absolute_delta
            .is_some_and(|min| abs_delta >= min)
            || self
                .config
                .min_percent_delta
                .is_some_and(|min| abs_percent >= min)
            || volatility_threshold.is_some_and(|min| abs_percent >= min)
    }

    /// Percent move needed to qualify in volatility mode
    fn volatility_threshold(&self, series: &[PricePoint]) -> Option<Decimal> {
        let multiplier = self.config.volatility_multiplier?;
        step_return_volatility(series).and_then(|sigma| sigma.checked_mul(multiplier))
    }

    fn reject(&self, error: AnalysisError) -> AnalysisError {
        self.recorder.record(&DiagnosticEvent::ValidationFailed {
            stage: AnalysisStage::Price,
            reason: error.to_string(),
        });
        error
    }
}

/// One-shot analysis with an explicit configuration
pub fn analyze(
    prices: &[PricePoint],
    config: &PriceAnalyzerConfig,
) -> AnalysisResult<Vec<PriceMovement>> {
    PriceAnalyzer::new(config.clone())?.analyze(prices)
}

fn validate_series(prices: &[PricePoint]) -> AnalysisResult<()> {
    if prices.len() < MIN_PRICE_POINTS {
        return Err(AnalysisError::InsufficientData {
            required: MIN_PRICE_POINTS,
            actual: prices.len(),
        });
    }

    for (index, pair) in prices.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(AnalysisError::UnorderedInput {
                series: SERIES_NAME,
                index: index + 1,
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
    }

    if let Some((index, point)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| p.value <= Decimal::ZERO)
    {
        return Err(AnalysisError::InvalidPrice {
            index,
            value: point.value,
        });
    }

    Ok(())
}
