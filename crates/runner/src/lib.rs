//! Catalyst Runner - Event/Price Correlation Runs
//!
//! Wires the analyzers into something a caller can run:
//!
//! - **Settings**: JSON settings documents for both analyzers
//! - **Pipeline**: price stage, then event stage, then a report
//! - **Batch**: independent runs in parallel on the tokio runtime
//! - **CLI**: the `catalyst` binary prints a report as JSON
//!
//! ## Architecture
//!
//! ```text
//!   settings.json ──► AnalysisSettings
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    AnalysisPipeline                      │
//! │                                                          │
//! │  PricePoint[] ──► PriceAnalyzer ──► PriceMovement[]      │
//! │                                          │               │
//! │  MarketEvent[] ─────────────────► EventAnalyzer          │
//! │                                          │               │
//! └──────────────────────────────────────────┼───────────────┘
//!                                            ▼
//!                                     AnalysisReport
//!                      (movements, results, summary) ──► JSON
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalyst_runner::{AnalysisPipeline, AnalysisRun, AnalysisSettings};
//!
//! let settings = AnalysisSettings::from_file("settings.json")?;
//! let pipeline = AnalysisPipeline::new(settings)?;
//! let report = pipeline.run(&AnalysisRun::new("BTC-USD", prices, events))?;
//! ```

pub mod batch;
pub mod error;
pub mod pipeline;
pub mod settings;

// Re-export main types
pub use batch::run_batch;
pub use error::{RunnerError, RunnerResult};
pub use pipeline::{AnalysisPipeline, AnalysisReport, AnalysisRun};
pub use settings::AnalysisSettings;
