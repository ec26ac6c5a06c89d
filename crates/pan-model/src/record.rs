//! Raw and cleaned identifier values.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared width of the raw PAN attribute in the source table.
pub const RAW_VALUE_WIDTH: usize = 20;

/// One raw input record as delivered by ingestion.
///
/// `value` is `None` when the source cell was null or missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based source line (0 when the record did not come from a file).
    pub line: u64,
    pub value: Option<String>,
}

impl RawRecord {
    pub fn new(line: u64, value: Option<String>) -> Self {
        Self { line, value }
    }

    /// Build records from in-memory values, numbering them from 1.
    pub fn from_values<I, S>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| Self::new(idx as u64 + 1, value.map(Into::into)))
            .collect()
    }

    /// True when the value is null, empty, or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.value.as_deref().is_none_or(|v| v.trim().is_empty())
    }
}

/// A trimmed, upper-cased identifier.
///
/// Can only be built through [`CleanedValue::parse`], so a value never has
/// surrounding whitespace or lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanedValue(String);

impl CleanedValue {
    /// Trim and upper-case `raw`; `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CleanedValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CleanedValue {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CleanedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
