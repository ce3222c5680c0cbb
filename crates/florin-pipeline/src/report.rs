//! Per-dataset run reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Final status of one dataset's pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// All of the dataset's outputs were written.
    Completed,
    /// The run aborted before all outputs were written.
    Failed,
}

impl RunStatus {
    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The result of one dataset's isolated pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOutcome {
    /// The dataset identifier.
    pub dataset_id: String,
    /// Human-readable dataset description.
    pub description: String,
    /// Final status of the run.
    pub status: RunStatus,
    /// Total rows written across this dataset's outputs.
    pub rows_written: u64,
    /// Paths of the files written before completion or failure.
    pub outputs: Vec<PathBuf>,
    /// Error message if the run failed.
    pub error: Option<String>,
}

impl DatasetOutcome {
    /// Creates a completed outcome.
    #[must_use]
    pub fn completed(
        dataset_id: impl Into<String>,
        description: impl Into<String>,
        rows_written: u64,
        outputs: Vec<PathBuf>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            description: description.into(),
            status: RunStatus::Completed,
            rows_written,
            outputs,
            error: None,
        }
    }

    /// Creates a failed outcome with nothing written.
    #[must_use]
    pub fn failed(
        dataset_id: impl Into<String>,
        description: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::failed_after(dataset_id, description, 0, Vec::new(), error)
    }

    /// Creates a failed outcome that still accounts for the rows and files
    /// written before the failure.
    #[must_use]
    pub fn failed_after(
        dataset_id: impl Into<String>,
        description: impl Into<String>,
        rows_written: u64,
        outputs: Vec<PathBuf>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            description: description.into(),
            status: RunStatus::Failed,
            rows_written,
            outputs,
            error: Some(error.into()),
        }
    }

    /// Returns true if this dataset's run failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, RunStatus::Failed)
    }
}

/// Structured result of a whole run, one outcome per dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    outcomes: Vec<DatasetOutcome>,
}

impl RunReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Records one dataset's outcome.
    pub fn push(&mut self, outcome: DatasetOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns the outcomes sorted by dataset ID.
    ///
    /// Datasets run concurrently and finish in arbitrary order; sorting
    /// keeps the rendered report stable across runs.
    pub fn sort(&mut self) {
        self.outcomes.sort_by(|a, b| a.dataset_id.cmp(&b.dataset_id));
    }

    /// Returns all outcomes in report order.
    #[must_use]
    pub fn outcomes(&self) -> &[DatasetOutcome] {
        &self.outcomes
    }

    /// Returns the number of datasets that completed.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_failed()).count()
    }

    /// Returns the number of datasets that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    /// Returns true if every dataset completed.
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.failed() == 0
    }
}
