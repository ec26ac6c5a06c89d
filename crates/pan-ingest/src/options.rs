//! Ingestion settings.

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Header names picked automatically when no column is requested.
pub const DEFAULT_COLUMN_NAMES: &[&str] = &["pan_number", "pan_numbers", "pan"];

/// How to read a delimited PAN file.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Column to read, matched case-insensitively against the header.
    ///
    /// When unset, the first header in [`DEFAULT_COLUMN_NAMES`] is used, or
    /// the first column if none match.
    pub column: Option<String>,
    pub delimiter: u8,
    /// Whether the first row holds column names.
    pub has_header: bool,
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            column: None,
            delimiter: b',',
            has_header: true,
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}
