use catalyst_ports::AnalysisError;
use thiserror::Error;

/// Errors surfaced by the runner and the CLI
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error("analysis task failed: {0}")]
    Task(String),
}

impl RunnerError {
    /// Process exit code for the CLI
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Analysis(AnalysisError::MissingConfig(_))
            | Self::Analysis(AnalysisError::InvalidConfig { .. }) => 2,
            Self::Analysis(_) => 3,
            Self::Io { .. } | Self::Parse { .. } => 4,
            Self::Serialization(_) | Self::Task(_) => 10,
        }
    }
}

pub type RunnerResult<T> = Result<T, RunnerError>;
