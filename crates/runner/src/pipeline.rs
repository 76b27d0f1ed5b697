//! Pipeline - one price stage followed by one event stage
//!
//! The event stage consumes the complete output of the price stage, so a run
//! is strictly sequential. Runs share nothing and can be batched freely (see
//! [`crate::batch`]).

use catalyst_core::{
    ClassificationSummary, CorrelationResult, MarketEvent, PriceMovement, PricePoint,
    rank_by_impact,
};
use catalyst_diagnostics::LogRecorder;
use catalyst_event_analyzer::EventAnalyzer;
use catalyst_ports::{AnalysisResult, DiagnosticEvent, DiagnosticsRecorder};
use catalyst_price_analyzer::PriceAnalyzer;
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{RunnerError, RunnerResult};
use crate::settings::AnalysisSettings;

/// Inputs for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Instrument the prices belong to (label only)
    pub instrument: String,
    pub prices: Vec<PricePoint>,
    pub events: Vec<MarketEvent>,
}

impl AnalysisRun {
    pub fn new(
        instrument: impl Into<String>,
        prices: Vec<PricePoint>,
        events: Vec<MarketEvent>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            prices,
            events,
        }
    }

    /// Load prices and events from JSON array files
    pub fn from_files(
        instrument: impl Into<String>,
        prices: impl AsRef<Path>,
        events: impl AsRef<Path>,
    ) -> RunnerResult<Self> {
        Ok(Self::new(
            instrument,
            read_json_array(prices.as_ref(), "price series")?,
            read_json_array(events.as_ref(), "events")?,
        ))
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path, what: &str) -> RunnerResult<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|source| RunnerError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RunnerError::Parse {
        what: format!("{} in '{}'", what, path.display()),
        source,
    })
}

/// Outcome of one run, ready for the reporting layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub instrument: String,
    /// Detected movements, ascending by start
    pub movements: Vec<PriceMovement>,
    /// One result per input event, in input order
    pub results: Vec<CorrelationResult>,
    pub summary: ClassificationSummary,
}

impl AnalysisReport {
    /// Most recent movement by end timestamp
    pub fn latest_movement(&self) -> Option<&PriceMovement> {
        self.movements.iter().max_by_key(|m| m.end.timestamp)
    }

    /// Results ordered by descending impact
    pub fn ranked_results(&self) -> Vec<CorrelationResult> {
        let mut ranked = self.results.clone();
        rank_by_impact(&mut ranked);
        ranked
    }
}

/// Runs the price analyzer and then the event analyzer
pub struct AnalysisPipeline {
    price: PriceAnalyzer,
    event: EventAnalyzer,
    recorder: Arc<dyn DiagnosticsRecorder>,
}

impl AnalysisPipeline {
    /// Create a pipeline that records diagnostics through the `log` facade
    pub fn new(settings: AnalysisSettings) -> AnalysisResult<Self> {
        let recorder: Arc<dyn DiagnosticsRecorder> = Arc::new(LogRecorder::new());
        Ok(Self {
            price: PriceAnalyzer::new(settings.price)?.with_recorder(recorder.clone()),
            event: EventAnalyzer::new(settings.event)?.with_recorder(recorder.clone()),
            recorder,
        })
    }

    /// Builder: Send diagnostics from both stages to `recorder`
    pub fn with_recorder(mut self, recorder: Arc<dyn DiagnosticsRecorder>) -> Self {
        self.price = self.price.with_recorder(recorder.clone());
        self.event = self.event.with_recorder(recorder.clone());
        self.recorder = recorder;
        self
    }

    /// Analyze one run; any validation failure aborts the whole run
    pub fn run(&self, run: &AnalysisRun) -> AnalysisResult<AnalysisReport> {
        let run_id = Uuid::new_v4();
        self.recorder.record(&DiagnosticEvent::RunStarted {
            run_id: run_id.to_string(),
            instrument: run.instrument.clone(),
            price_points: run.prices.len(),
            events: run.events.len(),
        });

        let movements = self.price.analyze(&run.prices)?;
        let results = self.event.analyze(&run.events, &movements)?;
        let summary = ClassificationSummary::from_results(&results);

        info!(
            "Run {} ({}): {} movements, {}/{} events correlated",
            run_id,
            run.instrument,
            movements.len(),
            summary.correlated,
            summary.total()
        );
        self.recorder.record(&DiagnosticEvent::RunCompleted {
            run_id: run_id.to_string(),
        });

        Ok(AnalysisReport {
            run_id,
            instrument: run.instrument.clone(),
            movements,
            results,
            summary,
        })
    }
}
