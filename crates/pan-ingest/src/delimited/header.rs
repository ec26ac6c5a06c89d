//! CSV header parsing and column selection.

use crate::options::DEFAULT_COLUMN_NAMES;

/// Column names from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names (BOM stripped, trimmed).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|c| normalize_header(c.as_ref()))
                .collect(),
        }
    }

    /// True when there are no columns or every name is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Index of `name`, ignoring ASCII case.
    pub fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(wanted))
    }

    /// Index of the column to read.
    ///
    /// A requested name must exist. Without one, well-known PAN headers are
    /// preferred, then the first column.
    pub fn resolve(&self, requested: Option<&str>) -> Option<usize> {
        if let Some(name) = requested {
            return self.position(name);
        }
        DEFAULT_COLUMN_NAMES
            .iter()
            .find_map(|name| self.position(name))
            .or(Some(0))
    }
}

/// Strips a UTF-8 BOM and surrounding whitespace from a header value.
pub fn normalize_header(value: &str) -> String {
    value.trim_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  pan_number  "), "pan_number");
        assert_eq!(normalize_header("\u{feff}pan_number"), "pan_number");
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let headers = CsvHeaders::new(["id", "PAN_Number"]);
        assert_eq!(headers.position("pan_number"), Some(1));
        assert_eq!(headers.position(" ID "), Some(0));
        assert_eq!(headers.position("name"), None);
    }

    #[test]
    fn test_resolve_requested() {
        let headers = CsvHeaders::new(["id", "pan"]);
        assert_eq!(headers.resolve(Some("id")), Some(0));
        assert_eq!(headers.resolve(Some("missing")), None);
    }

    #[test]
    fn test_resolve_prefers_known_names() {
        let headers = CsvHeaders::new(["id", "name", "Pan_Numbers"]);
        assert_eq!(headers.resolve(None), Some(2));
        let other = CsvHeaders::new(["value", "note"]);
        assert_eq!(other.resolve(None), Some(0));
    }

    #[test]
    fn test_is_empty() {
        assert!(CsvHeaders::new(Vec::<String>::new()).is_empty());
        assert!(CsvHeaders::new(["", " "]).is_empty());
        assert!(!CsvHeaders::new(["pan"]).is_empty());
    }
}
