//! Event Analyzer
//!
//! Matches each event to nearby movements, scores and classifies it.

use catalyst_core::{ClassificationSummary, CorrelationResult, MarketEvent, PriceMovement};
use catalyst_diagnostics::NullRecorder;
use catalyst_ports::{
    AnalysisError, AnalysisResult, AnalysisStage, DiagnosticEvent, DiagnosticsRecorder,
};
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::EventAnalyzerConfig;
use crate::matcher::{candidates, match_range};
use crate::scorer::ImpactScorer;

const SERIES_NAME: &str = "movements";

/// Scores market events against detected price movements
pub struct EventAnalyzer {
    config: EventAnalyzerConfig,
    scorer: ImpactScorer,
    recorder: Arc<dyn DiagnosticsRecorder>,
}

impl EventAnalyzer {
    /// Create an analyzer, validating the configuration up front
    pub fn new(config: EventAnalyzerConfig) -> AnalysisResult<Self> {
        config.validate()?;
        let scorer = ImpactScorer::new(&config);
        Ok(Self {
            config,
            scorer,
            recorder: Arc::new(NullRecorder::new()),
        })
    }

    /// Builder: Send diagnostics to `recorder`
    pub fn with_recorder(mut self, recorder: Arc<dyn DiagnosticsRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    /// Builder: Replace the scorer (custom decay functions)
    pub fn with_scorer(mut self, scorer: ImpactScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &EventAnalyzerConfig {
        &self.config
    }

    /// Produce one result per event, in input order
    ///
    /// `movements` must be sorted by start timestamp, as the price analyzer
    /// emits them. An empty event set yields an empty result.
    pub fn analyze(
        &self,
        events: &[MarketEvent],
        movements: &[PriceMovement],
    ) -> AnalysisResult<Vec<CorrelationResult>> {
        self.recorder.record(&DiagnosticEvent::StageStarted {
            stage: AnalysisStage::Event,
            inputs: events.len(),
        });

        if let Err(e) = validate_movements(movements).and_then(|()| validate_events(events)) {
            self.recorder.record(&DiagnosticEvent::ValidationFailed {
                stage: AnalysisStage::Event,
                reason: e.to_string(),
            });
            return Err(e);
        }

        let results: Vec<CorrelationResult> = events
            .iter()
            .map(|event| self.correlate(event, movements))
            .collect();

        let summary = ClassificationSummary::from_results(&results);
        debug!(
            "Event analysis: {} events against {} movements -> {} correlated, {} weak, {} uncorrelated",
            events.len(),
            movements.len(),
            summary.correlated,
            summary.weak,
            summary.uncorrelated
        );
        self.recorder
            .record(&DiagnosticEvent::EventsClassified { summary });

        Ok(results)
    }

    /// Events whose matching window would include `movement`, nearest first
    pub fn events_near<'a>(
        &self,
        movement: &PriceMovement,
        events: &'a [MarketEvent],
    ) -> Vec<&'a MarketEvent> {
        let mut near: Vec<&MarketEvent> = events
            .iter()
            .filter(|e| {
                let (from, to) =
                    match_range(e.timestamp, self.config.window_before, self.config.window_after);
                movement.intersects(from, to)
            })
            .collect();
        near.sort_by_key(|e| movement.distance_to(e.timestamp));
        near
    }

    fn correlate(&self, event: &MarketEvent, movements: &[PriceMovement]) -> CorrelationResult {
        let matched = candidates(
            event.timestamp,
            movements,
            self.config.window_before,
            self.config.window_after,
        );
        if matched.is_empty() {
            return CorrelationResult::unmatched(event.clone());
        }

        let impact_score = self.scorer.score(event, &matched, &self.config);
        CorrelationResult {
            event: event.clone(),
            matched_movements: matched.iter().map(|c| c.movement.clone()).collect(),
            impact_score,
            classification: self.config.classify(impact_score),
        }
    }
}

/// One-shot analysis with an explicit configuration
pub fn analyze(
    events: &[MarketEvent],
    movements: &[PriceMovement],
    config: &EventAnalyzerConfig,
) -> AnalysisResult<Vec<CorrelationResult>> {
    EventAnalyzer::new(config.clone())?.analyze(events, movements)
}

fn validate_movements(movements: &[PriceMovement]) -> AnalysisResult<()> {
    for (index, pair) in movements.windows(2).enumerate() {
        if pair[1].start.timestamp < pair[0].start.timestamp {
            return Err(AnalysisError::UnorderedInput {
                series: SERIES_NAME,
                index: index + 1,
                previous: pair[0].start.timestamp,
                current: pair[1].start.timestamp,
            });
        }
    }
    Ok(())
}

fn validate_events(events: &[MarketEvent]) -> AnalysisResult<()> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(event.id.as_str()) {
            return Err(AnalysisError::DuplicateEventId(event.id.clone()));
        }
    }
    Ok(())
}
