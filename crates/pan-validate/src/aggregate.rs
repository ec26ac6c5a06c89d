//! Summary counts over a classified run.

use pan_model::{Classification, DuplicateMode, SummaryReport};

use crate::normalize::CleanedSet;

/// Derive the run summary.
///
/// In [`DuplicateMode::Collapse`] each distinct value counts once; in
/// [`DuplicateMode::PerRecord`] it counts once per raw occurrence.
pub fn summarize(
    cleaned: &CleanedSet,
    classifications: &[Classification],
    mode: DuplicateMode,
) -> SummaryReport {
    let weight = |classification: &Classification| match mode {
        DuplicateMode::Collapse => 1,
        DuplicateMode::PerRecord => cleaned.occurrences(&classification.value),
    };

    let mut total_valid = 0u64;
    let mut total_invalid = 0u64;
    for classification in classifications {
        if classification.is_valid() {
            total_valid += weight(classification);
        } else {
            total_invalid += weight(classification);
        }
    }

    let total_processed = cleaned.raw_records();
    let classified = total_valid + total_invalid;
    debug_assert!(classified <= total_processed);

    SummaryReport {
        total_processed,
        total_valid,
        total_invalid,
        total_blank: total_processed.saturating_sub(classified),
        blank_records: cleaned.blank_records(),
        duplicate_records: match mode {
            DuplicateMode::Collapse => cleaned.duplicate_records(),
            DuplicateMode::PerRecord => 0,
        },
    }
}
