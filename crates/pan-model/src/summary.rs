use serde::{Deserialize, Serialize};

/// Aggregate counts for one validation run.
///
/// `total_blank` is kept as `total_processed - (total_valid + total_invalid)`
/// for compatibility. It mixes null/blank inputs with values dropped by
/// deduplication; `blank_records` and `duplicate_records` split it apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_processed: u64,
    pub total_valid: u64,
    pub total_invalid: u64,
    pub total_blank: u64,
    /// Raw records that were null, empty, or whitespace only.
    pub blank_records: u64,
    /// Non-blank raw records folded into an earlier identical value.
    pub duplicate_records: u64,
}

impl SummaryReport {
    /// Records that reached the classifier.
    pub fn total_classified(&self) -> u64 {
        self.total_valid + self.total_invalid
    }

    pub fn has_invalid(&self) -> bool {
        self.total_invalid > 0
    }
}
