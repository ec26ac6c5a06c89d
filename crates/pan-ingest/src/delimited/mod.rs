//! Delimited file reading.

mod header;
mod reader;

pub use header::{CsvHeaders, normalize_header};
pub use reader::{
    check_file_size, check_file_size_with_limit, read_pan_records,
    read_pan_records_from_reader, validate_encoding,
};
