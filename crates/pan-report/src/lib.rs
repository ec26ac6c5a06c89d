//! PAN report generation.
//!
//! Two outputs per run:
//!
//! - **Classifications** (`pan_classifications.csv`): one row per distinct value
//! - **Summary** (`pan_summary.json`): counts, failure breakdown, provenance

mod classifications;
mod error;
mod hash;
mod summary;

use std::path::{Path, PathBuf};

use pan_model::{Classification, DuplicateMode, SummaryReport};
use tracing::info;

pub use classifications::{CLASSIFICATION_HEADERS, write_classifications_csv};
pub use error::{ReportError, Result};
pub use hash::{file_sha256, sha256_hex};
pub use summary::{
    REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ReportSource, SummaryPayload, failure_counts,
    write_summary_json,
};

pub const CLASSIFICATIONS_FILE: &str = "pan_classifications.csv";
pub const SUMMARY_FILE: &str = "pan_summary.json";

/// Paths written by [`write_reports`].
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub classifications: PathBuf,
    pub summary: PathBuf,
}

/// Write both outputs into `output_dir`, creating it if needed.
pub fn write_reports(
    output_dir: &Path,
    source: ReportSource,
    duplicate_mode: DuplicateMode,
    summary: SummaryReport,
    classifications: &[Classification],
) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let paths = ReportPaths {
        classifications: output_dir.join(CLASSIFICATIONS_FILE),
        summary: output_dir.join(SUMMARY_FILE),
    };
    write_classifications_csv(&paths.classifications, classifications)?;
    let payload = SummaryPayload::new(source, duplicate_mode, summary, classifications);
    write_summary_json(&paths.summary, &payload)?;

    info!(
        output_dir = %output_dir.display(),
        rows = classifications.len(),
        "reports written"
    );
    Ok(paths)
}
