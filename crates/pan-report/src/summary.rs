//! Run summary as JSON.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use pan_model::{Classification, DuplicateMode, SummaryReport};
use serde::Serialize;

use crate::error::{ReportError, Result};

pub const REPORT_SCHEMA: &str = "pan-validator/summary";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Where the records came from.
#[derive(Debug, Clone, Default)]
pub struct ReportSource {
    pub path: Option<PathBuf>,
    pub sha256: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: Option<PathBuf>,
    pub source_sha256: Option<String>,
    pub duplicate_mode: DuplicateMode,
    pub summary: SummaryReport,
    /// Invalid values per failing check code.
    pub failure_counts: BTreeMap<&'static str, u64>,
}

impl SummaryPayload {
    pub fn new(
        source: ReportSource,
        duplicate_mode: DuplicateMode,
        summary: SummaryReport,
        classifications: &[Classification],
    ) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            source: source.path,
            source_sha256: source.sha256,
            duplicate_mode,
            summary,
            failure_counts: failure_counts(classifications),
        }
    }
}

/// Count classifications per failing check code.
pub fn failure_counts(classifications: &[Classification]) -> BTreeMap<&'static str, u64> {
    let mut counts = BTreeMap::new();
    for failure in classifications.iter().flat_map(|c| c.failures.iter()) {
        *counts.entry(failure.code()).or_insert(0) += 1;
    }
    counts
}

pub fn write_summary_json(path: &Path, payload: &SummaryPayload) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
