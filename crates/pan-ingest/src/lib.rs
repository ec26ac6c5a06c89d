//! PAN data ingestion utilities.
//!
//! Reads one column of a delimited file (header row skipped) into
//! [`pan_model::RawRecord`]s. No cleaning happens here.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pan_ingest::{IngestOptions, read_pan_records};
//!
//! let options = IngestOptions::default().with_column("pan_number");
//! let records = read_pan_records(Path::new("pan_numbers.csv"), &options)?;
//! ```

mod delimited;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{DEFAULT_COLUMN_NAMES, IngestOptions, MAX_CSV_FILE_SIZE};

// === Delimited Reading ===
pub use delimited::{
    CsvHeaders, check_file_size, check_file_size_with_limit, normalize_header,
    read_pan_records, read_pan_records_from_reader, validate_encoding,
};
