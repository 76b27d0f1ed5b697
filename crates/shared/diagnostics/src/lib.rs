//! Catalyst Diagnostics
//!
//! Recorder implementations for the [`DiagnosticsRecorder`] port:
//!
//! - [`LogRecorder`]: forwards every event to the `log` facade
//! - [`MemoryRecorder`]: keeps events in memory for inspection in tests
//! - [`NullRecorder`]: discards everything (default for bare analyzers)

mod log_recorder;
mod memory;
mod null;

pub use log_recorder::LogRecorder;
pub use memory::MemoryRecorder;
pub use null::NullRecorder;

// Re-export the port for convenience
pub use catalyst_ports::{AnalysisStage, DiagnosticEvent, DiagnosticsRecorder};
