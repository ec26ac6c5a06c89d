//! Raw record cleaning and deduplication.

use std::collections::BTreeMap;

use pan_model::{CleanedValue, RawRecord};

/// Trim and upper-case one raw value; `None` for blank input.
pub fn normalize(raw: &str) -> Option<CleanedValue> {
    CleanedValue::parse(raw)
}

/// Distinct cleaned values with their raw occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedSet {
    occurrences: BTreeMap<CleanedValue, u64>,
    raw_records: u64,
    blank_records: u64,
}

impl CleanedSet {
    /// Distinct values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &CleanedValue> {
        self.occurrences.keys()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.occurrences.contains_key(value)
    }

    /// How many raw records cleaned to `value`.
    pub fn occurrences(&self, value: &CleanedValue) -> u64 {
        self.occurrences.get(value).copied().unwrap_or(0)
    }

    /// Every raw record seen, blank or not.
    pub fn raw_records(&self) -> u64 {
        self.raw_records
    }

    pub fn blank_records(&self) -> u64 {
        self.blank_records
    }

    pub fn non_blank_records(&self) -> u64 {
        self.raw_records - self.blank_records
    }

    /// Non-blank records that repeated an earlier cleaned value.
    pub fn duplicate_records(&self) -> u64 {
        self.non_blank_records() - self.occurrences.len() as u64
    }

    fn insert(&mut self, raw: Option<&str>) {
        self.raw_records += 1;
        match raw.and_then(normalize) {
            Some(value) => *self.occurrences.entry(value).or_insert(0) += 1,
            None => self.blank_records += 1,
        }
    }
}

/// Clean every record, dropping blanks and collapsing duplicates.
pub fn normalize_records(records: &[RawRecord]) -> CleanedSet {
    let mut set = CleanedSet::default();
    for record in records {
        set.insert(record.value.as_deref());
    }
    set
}
