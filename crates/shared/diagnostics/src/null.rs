use catalyst_ports::{DiagnosticEvent, DiagnosticsRecorder};

/// Recorder that drops every event
pub struct NullRecorder;

impl NullRecorder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsRecorder for NullRecorder {
    fn record(&self, _event: &DiagnosticEvent) {}

    fn name(&self) -> &str {
        "NullRecorder"
    }
}
