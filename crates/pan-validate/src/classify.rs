//! Valid/Invalid labelling of cleaned values.

use pan_model::{Category, Classification, CleanedValue};

use crate::checks::run_all;
use crate::normalize::CleanedSet;

/// Label one cleaned value.
///
/// Valid only when the format matches and no heuristic fires.
pub fn classify(value: &CleanedValue) -> Category {
    evaluate(value).category
}

/// Label one cleaned value and keep the failing checks.
pub fn evaluate(value: &CleanedValue) -> Classification {
    Classification::new(value.clone(), run_all(value.as_str()))
}

/// Classify every distinct value, in ascending value order.
pub fn classify_all(set: &CleanedSet) -> Vec<Classification> {
    set.values().map(evaluate).collect()
}
