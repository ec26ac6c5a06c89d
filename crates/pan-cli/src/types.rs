use std::path::PathBuf;

use pan_ingest::IngestOptions;
use pan_model::{Category, CheckFailure, CleanedValue, ValidationOptions};
use pan_report::ReportPaths;
use pan_validate::ValidationOutcome;
use serde::Serialize;

/// Inputs for one file validation run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub ingest: IngestOptions,
    pub validation: ValidationOptions,
    /// Report directory; `None` skips writing reports.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub outcome: ValidationOutcome,
    pub reports: Option<ReportPaths>,
}

/// Result for one value passed to `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRow {
    pub input: String,
    /// `None` when the input was blank.
    pub cleaned: Option<CleanedValue>,
    pub category: Option<Category>,
    pub failures: Vec<CheckFailure>,
}

impl CheckRow {
    pub fn is_valid(&self) -> bool {
        self.category.is_some_and(|category| category.is_valid())
    }
}
