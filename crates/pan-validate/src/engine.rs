//! End-to-end validation of a batch of raw records.

use std::time::Instant;

use pan_model::{Category, Classification, RawRecord, SummaryReport, ValidationOptions};
use tracing::{debug, info, info_span, warn};

use crate::aggregate::summarize;
use crate::classify::classify_all;
use crate::normalize::normalize_records;

/// Classifications and summary for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// One entry per distinct cleaned value, ascending.
    pub classifications: Vec<Classification>,
    pub summary: SummaryReport,
}

impl ValidationOutcome {
    pub fn valid(&self) -> impl Iterator<Item = &Classification> {
        self.with_category(Category::Valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Classification> {
        self.with_category(Category::Invalid)
    }

    fn with_category(&self, category: Category) -> impl Iterator<Item = &Classification> {
        self.classifications
            .iter()
            .filter(move |classification| classification.category == category)
    }
}

/// Clean, classify, and count `records`.
pub fn validate_records(records: &[RawRecord], options: &ValidationOptions) -> ValidationOutcome {
    let span = info_span!("validate_records", records = records.len());
    let _guard = span.enter();
    let start = Instant::now();

    if let Some(limit) = options.max_raw_length {
        flag_overlong(records, limit);
    }

    let cleaned = normalize_records(records);
    debug!(
        distinct = cleaned.len(),
        blank = cleaned.blank_records(),
        duplicates = cleaned.duplicate_records(),
        "normalized raw records"
    );

    let classifications = classify_all(&cleaned);
    let summary = summarize(&cleaned, &classifications, options.duplicates);
    info!(
        total_processed = summary.total_processed,
        total_classified = summary.total_classified(),
        total_valid = summary.total_valid,
        total_invalid = summary.total_invalid,
        total_blank = summary.total_blank,
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );

    ValidationOutcome {
        classifications,
        summary,
    }
}

fn flag_overlong(records: &[RawRecord], limit: usize) {
    let mut overlong = 0usize;
    for record in records {
        let Some(value) = record.value.as_deref() else {
            continue;
        };
        let length = value.chars().count();
        if length > limit {
            overlong += 1;
            debug!(line = record.line, length, limit, "raw value exceeds declared width");
        }
    }
    if overlong > 0 {
        warn!(count = overlong, limit, "raw values exceed declared width");
    }
}
