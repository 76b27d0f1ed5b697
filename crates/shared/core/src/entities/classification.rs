use serde::{Deserialize, Serialize};

use super::CorrelationResult;

/// How strongly an event is tied to the observed price movements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Impact score reached the correlated threshold
    Correlated,
    /// Impact score reached the weak threshold only
    Weak,
    /// Nothing (or too little) moved around the event
    Uncorrelated,
}

/// Result counts by classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub correlated: usize,
    pub weak: usize,
    pub uncorrelated: usize,
}

impl ClassificationSummary {
    pub fn from_results(results: &[CorrelationResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.add(result.classification);
        }
        summary
    }

    pub fn add(&mut self, classification: Classification) {
        match classification {
            Classification::Correlated => self.correlated += 1,
            Classification::Weak => self.weak += 1,
            Classification::Uncorrelated => self.uncorrelated += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.correlated + self.weak + self.uncorrelated
    }
}
