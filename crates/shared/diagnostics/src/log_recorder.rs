use catalyst_ports::{DiagnosticEvent, DiagnosticsRecorder};
use log::{debug, info, warn};

const TARGET: &str = "catalyst::diagnostics";

/// Recorder backed by the `log` facade
///
/// Whatever logger the host installs (env_logger in the CLI) decides where
/// the records go; a missing logger simply drops them.
pub struct LogRecorder;

impl LogRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsRecorder for LogRecorder {
    fn record(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::RunStarted {
                run_id,
                instrument,
                price_points,
                events,
            } => info!(
                target: TARGET,
                "[{}] run started: instrument={} price_points={} events={}",
                run_id, instrument, price_points, events
            ),
            DiagnosticEvent::StageStarted { stage, inputs } => debug!(
                target: TARGET,
                "{} analysis started: inputs={}",
                stage.as_str(),
                inputs
            ),
            DiagnosticEvent::MovementsDetected { candidates, count } => info!(
                target: TARGET,
                "movements detected: count={} candidates={}",
                count, candidates
            ),
            DiagnosticEvent::EventsClassified { summary } => info!(
                target: TARGET,
                "events classified: correlated={} weak={} uncorrelated={}",
                summary.correlated, summary.weak, summary.uncorrelated
            ),
            DiagnosticEvent::ValidationFailed { stage, reason } => warn!(
                target: TARGET,
                "{} analysis rejected input: {}",
                stage.as_str(),
                reason
            ),
            DiagnosticEvent::RunCompleted { run_id } => {
                info!(target: TARGET, "[{}] run completed", run_id)
            }
        }
    }

    fn name(&self) -> &str {
        "LogRecorder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::ClassificationSummary;
    use catalyst_ports::AnalysisStage;

    #[test]
    fn test_records_without_logger() {
        let recorder = LogRecorder::new();

        recorder.record(&DiagnosticEvent::StageStarted {
            stage: AnalysisStage::Event,
            inputs: 0,
        });
        recorder.record(&DiagnosticEvent::EventsClassified {
            summary: ClassificationSummary::default(),
        });
        assert_eq!(recorder.name(), "LogRecorder");
    }
}
