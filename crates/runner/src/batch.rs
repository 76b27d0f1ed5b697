//! Batch execution of independent runs
//!
//! Each run is CPU-bound and shares nothing with the others, so runs are
//! scheduled as blocking tasks on the tokio runtime. Results come back in
//! input order; one failing run does not affect the rest.

use log::{debug, warn};
use std::sync::Arc;

use crate::error::{RunnerError, RunnerResult};
use crate::pipeline::{AnalysisPipeline, AnalysisReport, AnalysisRun};

/// Run every analysis in parallel, preserving input order
pub async fn run_batch(
    pipeline: Arc<AnalysisPipeline>,
    runs: Vec<AnalysisRun>,
) -> Vec<RunnerResult<AnalysisReport>> {
    debug!("Scheduling {} analysis runs", runs.len());

    let handles: Vec<_> = runs
        .into_iter()
        .map(|run| {
            let pipeline = Arc::clone(&pipeline);
            tokio::task::spawn_blocking(move || pipeline.run(&run))
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        let report = match handle.await {
            Ok(result) => result.map_err(RunnerError::from),
            Err(e) => {
                warn!("Analysis task failed: {}", e);
                Err(RunnerError::Task(e.to_string()))
            }
        };
        reports.push(report);
    }
    reports
}
