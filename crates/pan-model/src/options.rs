//! Configuration options for PAN validation.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::record::RAW_VALUE_WIDTH;

/// How repeated cleaned values are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateMode {
    /// Count each distinct cleaned value once.
    #[default]
    Collapse,
    /// Count every non-blank raw record.
    PerRecord,
}

/// Options controlling a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub duplicates: DuplicateMode,

    /// Raw values longer than this are flagged in the log.
    ///
    /// They are still cleaned and classified. `None` disables the warning.
    pub max_raw_length: Option<usize>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicateMode::Collapse,
            max_raw_length: Some(RAW_VALUE_WIDTH),
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_duplicates(mut self, mode: DuplicateMode) -> Self {
        self.duplicates = mode;
        self
    }

    #[must_use]
    pub fn with_max_raw_length(mut self, limit: Option<usize>) -> Self {
        self.max_raw_length = limit;
        self
    }

    /// Reject option combinations that cannot be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.max_raw_length == Some(0) {
            return Err(ModelError::InvalidOption {
                name: "max_raw_length",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
