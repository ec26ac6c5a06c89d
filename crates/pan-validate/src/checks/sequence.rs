//! Strict ascending run detection.

/// True if every character code is exactly one more than the previous one.
///
/// Strings of length zero or one are vacuously sequential.
pub fn is_strictly_sequential(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(mut previous) = chars.next() else {
        return true;
    };
    for current in chars {
        if u32::from(previous) + 1 != u32::from(current) {
            return false;
        }
        previous = current;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_runs() {
        assert!(is_strictly_sequential("ABCDE"));
        assert!(is_strictly_sequential("VWXYZ"));
        assert!(!is_strictly_sequential("ABCDF"));
        assert!(!is_strictly_sequential("EDCBA"));
    }

    #[test]
    fn digit_runs() {
        assert!(is_strictly_sequential("1234"));
        assert!(is_strictly_sequential("6789"));
        assert!(!is_strictly_sequential("1235"));
        assert!(!is_strictly_sequential("1111"));
    }

    #[test]
    fn vacuous_cases() {
        assert!(is_strictly_sequential(""));
        assert!(is_strictly_sequential("Q"));
    }

    #[test]
    fn runs_across_code_points() {
        // '9' (0x39) is followed by ':' (0x3A), not 'A'
        assert!(is_strictly_sequential("89:"));
        assert!(!is_strictly_sequential("9A"));
    }
}
