//! Catalyst Ports
//!
//! Port definitions (traits) for the Catalyst correlation engine.
//! These define the boundaries between the analyzers and their collaborators.

mod decay;
mod diagnostics;
mod error;

pub use decay::ScoreDecay;
pub use diagnostics::{AnalysisStage, DiagnosticEvent, DiagnosticsRecorder};
pub use error::{AnalysisError, AnalysisResult};
