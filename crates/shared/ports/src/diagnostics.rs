use catalyst_core::ClassificationSummary;

/// Which analyzer produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStage {
    Price,
    Event,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Price => "price",
            AnalysisStage::Event => "event",
        }
    }
}

/// Structured diagnostics emitted while analyzing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// A pipeline run began
    RunStarted {
        run_id: String,
        instrument: String,
        price_points: usize,
        events: usize,
    },
    /// An analyzer accepted its inputs and started work
    StageStarted { stage: AnalysisStage, inputs: usize },
    /// Price analyzer finished; `candidates` counts windows that passed a
    /// threshold before overlapping movements were merged
    MovementsDetected { candidates: usize, count: usize },
    /// Event analyzer finished
    EventsClassified { summary: ClassificationSummary },
    /// A stage rejected its inputs
    ValidationFailed { stage: AnalysisStage, reason: String },
    /// A pipeline run finished
    RunCompleted { run_id: String },
}

/// Port for the logging collaborator
///
/// Recording is infallible from the caller's point of view: implementations
/// swallow their own failures so diagnostics never change analysis results.
pub trait DiagnosticsRecorder: Send + Sync {
    fn record(&self, event: &DiagnosticEvent);

    /// Get the recorder's name for debugging
    fn name(&self) -> &str {
        "DiagnosticsRecorder"
    }
}
