//! Classified value listing as CSV.

use std::path::Path;

use csv::WriterBuilder;
use pan_model::Classification;

use crate::error::{ReportError, Result};

/// Column names of the classification CSV.
pub const CLASSIFICATION_HEADERS: [&str; 3] = ["pan_number", "category", "failed_checks"];

/// Write one row per classification, in the order given.
pub fn write_classifications_csv(path: &Path, classifications: &[Classification]) -> Result<()> {
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(csv_error)?;
    writer
        .write_record(CLASSIFICATION_HEADERS)
        .map_err(csv_error)?;
    for classification in classifications {
        writer
            .write_record([
                classification.value.as_str(),
                classification.category.label(),
                classification.failure_codes().as_str(),
            ])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
