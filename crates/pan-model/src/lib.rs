pub mod classification;
pub mod error;
pub mod options;
pub mod record;
pub mod summary;

pub use classification::{Category, CheckFailure, Classification};
pub use error::{ModelError, Result};
pub use options::{DuplicateMode, ValidationOptions};
pub use record::{CleanedValue, RAW_VALUE_WIDTH, RawRecord};
pub use summary::SummaryReport;
