//! Structural PAN format check.

use std::sync::LazyLock;

use regex::Regex;

/// Five uppercase letters, four digits, one uppercase letter.
static PAN_FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid PAN format regex"));

/// True iff `s` is exactly `AAAAA9999A` (ASCII, case-sensitive).
pub fn matches_format(s: &str) -> bool {
    PAN_FORMAT_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed() {
        assert!(matches_format("ABCDE1234F"));
        assert!(matches_format("BNZAB2318K"));
    }

    #[test]
    fn is_case_sensitive() {
        assert!(!matches_format("abcde1234f"));
        assert!(!matches_format("ABCDE1234f"));
    }

    #[test]
    fn rejects_wrong_split() {
        assert!(!matches_format("ABCD1234FF"));
        assert!(!matches_format("ABCDEF234G"));
        assert!(!matches_format("ABCDE12345"));
    }

    #[test]
    fn is_anchored() {
        assert!(!matches_format("XABCDE1234F"));
        assert!(!matches_format("ABCDE1234FX"));
        assert!(!matches_format(" ABCDE1234F"));
        assert!(!matches_format(""));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(!matches_format("ÄBCDE1234F"));
        assert!(!matches_format("ABCDE١٢٣٤F"));
    }
}
