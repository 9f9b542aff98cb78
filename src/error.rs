//! Error types for loading scenarios and exporting projection output
//!
//! The projection engine itself is total; only the file edges can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scenario I/O
pub type PlanResult<T> = Result<T, PlanError>;

#[derive(Error, Debug)]
pub enum PlanError {
    /// File could not be opened, read, or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scenario document is not valid JSON for the expected shape
    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Scenario parsed but violates an input precondition
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

impl PlanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlanError::Io {
            path: path.into(),
            source,
        }
    }
}
