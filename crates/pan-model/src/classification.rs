//! Classification outcome types.

use serde::{Deserialize, Serialize};

use crate::record::CleanedValue;

/// Final label for a cleaned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Valid PAN")]
    Valid,
    #[serde(rename = "Invalid PAN")]
    Invalid,
}

impl Category {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Valid => "Valid PAN",
            Self::Invalid => "Invalid PAN",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// A rule that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckFailure {
    /// Not five letters, four digits, one letter.
    FormatMismatch,
    /// Two equal neighbouring characters in the letter block.
    AdjacentRepeat,
    /// Letter block is a strict ascending run (e.g. `ABCDE`).
    SequentialLetters,
    /// Digit block is a strict ascending run (e.g. `1234`).
    SequentialDigits,
}

impl CheckFailure {
    /// Stable code used in reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FormatMismatch => "PAN001",
            Self::AdjacentRepeat => "PAN002",
            Self::SequentialLetters => "PAN003",
            Self::SequentialDigits => "PAN004",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::FormatMismatch => "does not match AAAAA9999A",
            Self::AdjacentRepeat => "adjacent repeated letters",
            Self::SequentialLetters => "sequential letters",
            Self::SequentialDigits => "sequential digits",
        }
    }
}

/// Classification of one distinct cleaned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub value: CleanedValue,
    pub category: Category,
    /// Empty exactly when `category` is [`Category::Valid`].
    pub failures: Vec<CheckFailure>,
}

impl Classification {
    /// Build a classification; the category is derived from `failures`.
    pub fn new(value: CleanedValue, failures: Vec<CheckFailure>) -> Self {
        let category = if failures.is_empty() {
            Category::Valid
        } else {
            Category::Invalid
        };
        Self {
            value,
            category,
            failures,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.category.is_valid()
    }

    /// Failure codes joined with `;`, or an empty string.
    pub fn failure_codes(&self) -> String {
        self.failures
            .iter()
            .map(CheckFailure::code)
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_follows_failures() {
        let value = CleanedValue::parse("BNZAB2318K").unwrap();
        assert_eq!(Classification::new(value.clone(), vec![]).category, Category::Valid);
        let invalid = Classification::new(
            value,
            vec![CheckFailure::AdjacentRepeat, CheckFailure::SequentialDigits],
        );
        assert_eq!(invalid.category, Category::Invalid);
        assert_eq!(invalid.failure_codes(), "PAN002;PAN004");
    }

    #[test]
    fn category_serializes_with_label() {
        let json = serde_json::to_string(&Category::Invalid).unwrap();
        assert_eq!(json, "\"Invalid PAN\"");
        let failure = serde_json::to_string(&CheckFailure::SequentialLetters).unwrap();
        assert_eq!(failure, "\"sequential_letters\"");
    }
}
