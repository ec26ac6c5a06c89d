//! Delimited file reading into raw PAN records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord};
use pan_model::RawRecord;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::CsvHeaders;

/// Label used in errors for readers without a file path.
const READER_SOURCE: &str = "<reader>";

/// Check file size against the default limit.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, crate::options::MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject files that start with a UTF-16 byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }

    Ok(())
}

/// Read one column of a delimited file as raw PAN records.
///
/// Empty cells, short rows, and empty lines all become `None`. Cell contents
/// are not trimmed; cleaning belongs to the validator.
pub fn read_pan_records(path: &Path, options: &IngestOptions) -> Result<Vec<RawRecord>> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;

    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    let records = read_records(&bytes, path, options)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "loaded raw records"
    );
    Ok(records)
}

/// Same as [`read_pan_records`] for an in-memory or streamed source.
pub fn read_pan_records_from_reader<R: Read>(
    mut reader: R,
    options: &IngestOptions,
) -> Result<Vec<RawRecord>> {
    let path = Path::new(READER_SOURCE);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    read_records(&bytes, path, options)
}

fn read_records(bytes: &[u8], path: &Path, options: &IngestOptions) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(bytes);

    let column = if options.has_header {
        let headers = CsvHeaders::new(reader.headers().map_err(|e| IngestError::csv(path, &e))?);
        if headers.is_empty() {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
        let index = headers
            .resolve(options.column.as_deref())
            .ok_or_else(|| IngestError::MissingColumn {
                column: options.column.clone().unwrap_or_default(),
                path: path.to_path_buf(),
            })?;
        debug!(column = %headers.columns[index], index, "selected PAN column");
        index
    } else if let Some(column) = &options.column {
        return Err(IngestError::MissingColumn {
            column: column.clone(),
            path: path.to_path_buf(),
        });
    } else {
        0
    };

    // The CSV reader drops empty lines; each one is a null record here.
    let mut records = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let (line, empty) = empty_lines_at(bytes, reader.position());
        records.extend((line..line + empty).map(|line| RawRecord::new(line, None)));
        if !reader
            .read_record(&mut record)
            .map_err(|e| IngestError::csv(path, &e))?
        {
            break;
        }
        records.push(RawRecord::new(line + empty, cell_value(&record, column)));
    }
    Ok(records)
}

fn cell_value(record: &StringRecord, column: usize) -> Option<String> {
    record
        .get(column)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Line of the first byte after `position` and the number of empty lines
/// starting there.
///
/// A record ended by `\r\n` leaves its `\n` unread, so that byte belongs to
/// the previous line rather than to an empty one.
fn empty_lines_at(bytes: &[u8], position: &Position) -> (u64, u64) {
    let offset = usize::try_from(position.byte()).unwrap_or(bytes.len());
    let mut line = position.line();
    let mut rest = bytes.get(offset..).unwrap_or_default();
    let after_cr = offset.checked_sub(1).and_then(|i| bytes.get(i)) == Some(&b'\r');
    if after_cr && rest.first() == Some(&b'\n') {
        rest = &rest[1..];
        line += 1;
    }

    let mut empty = 0;
    let mut idx = 0;
    while let Some(&byte) = rest.get(idx) {
        idx += match byte {
            b'\r' if rest.get(idx + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => break,
        };
        empty += 1;
    }
    (line, empty)
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
