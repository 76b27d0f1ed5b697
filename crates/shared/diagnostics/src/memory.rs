use catalyst_ports::{DiagnosticEvent, DiagnosticsRecorder};
use std::sync::Mutex;

/// Recorder that keeps every event in memory
///
/// A poisoned lock is recovered rather than propagated.
pub struct MemoryRecorder {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Default for MemoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsRecorder for MemoryRecorder {
    fn record(&self, event: &DiagnosticEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }

    fn name(&self) -> &str {
        "MemoryRecorder"
    }
}
