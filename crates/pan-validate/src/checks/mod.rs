//! PAN check modules.
//!
//! Each module is a pure predicate over a string. [`run_all`] composes them
//! into the list of failures for one cleaned value.

mod adjacency;
mod format;
mod sequence;

pub use adjacency::has_adjacent_repeat;
pub use format::matches_format;
pub use sequence::is_strictly_sequential;

use pan_model::CheckFailure;

/// Number of leading letters checked for repeats and runs.
pub const LETTER_BLOCK_LEN: usize = 5;

/// Character position of the digit block.
pub const DIGIT_BLOCK_START: usize = 5;

/// Number of digits checked for runs.
pub const DIGIT_BLOCK_LEN: usize = 4;

/// Run every check against `value`.
///
/// A format mismatch is reported alone; the heuristics are only meaningful
/// on well-formed input.
pub fn run_all(value: &str) -> Vec<CheckFailure> {
    if !matches_format(value) {
        return vec![CheckFailure::FormatMismatch];
    }

    let mut failures = Vec::new();

    // 1. Repeated neighbours in the letter block
    if has_adjacent_repeat(value) {
        failures.push(CheckFailure::AdjacentRepeat);
    }

    // 2. Ascending letter run
    if is_strictly_sequential(letter_block(value)) {
        failures.push(CheckFailure::SequentialLetters);
    }

    // 3. Ascending digit run
    if is_strictly_sequential(digit_block(value)) {
        failures.push(CheckFailure::SequentialDigits);
    }

    failures
}

/// The first five characters (fewer if `value` is shorter).
pub fn letter_block(value: &str) -> &str {
    char_segment(value, 0, LETTER_BLOCK_LEN)
}

/// Characters six through nine (possibly empty if `value` is shorter).
pub fn digit_block(value: &str) -> &str {
    char_segment(value, DIGIT_BLOCK_START, DIGIT_BLOCK_LEN)
}

/// Slice `len` characters starting at character `start`, clamped to the end.
fn char_segment(value: &str, start: usize, len: usize) -> &str {
    let begin = value
        .char_indices()
        .nth(start)
        .map_or(value.len(), |(idx, _)| idx);
    let rest = &value[begin..];
    let end = rest.char_indices().nth(len).map_or(rest.len(), |(idx, _)| idx);
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_of_full_value() {
        assert_eq!(letter_block("ABCDE1234F"), "ABCDE");
        assert_eq!(digit_block("ABCDE1234F"), "1234");
    }

    #[test]
    fn blocks_of_short_value() {
        assert_eq!(letter_block("ABC"), "ABC");
        assert_eq!(digit_block("ABC"), "");
        assert_eq!(digit_block("ABCDE12"), "12");
    }

    #[test]
    fn blocks_respect_char_boundaries() {
        assert_eq!(letter_block("ÄÖÜßÉ12"), "ÄÖÜßÉ");
        assert_eq!(digit_block("ÄÖÜßÉ12"), "12");
    }

    #[test]
    fn run_all_reports_format_alone() {
        assert_eq!(run_all("AAAA"), vec![CheckFailure::FormatMismatch]);
    }

    #[test]
    fn run_all_lists_every_heuristic() {
        assert_eq!(
            run_all("ABCDE1234F"),
            vec![
                CheckFailure::SequentialLetters,
                CheckFailure::SequentialDigits
            ]
        );
        assert_eq!(run_all("AAAAA0000A"), vec![CheckFailure::AdjacentRepeat]);
        assert!(run_all("BNZAB2318K").is_empty());
        assert_eq!(run_all("BNZAA2318K"), vec![CheckFailure::AdjacentRepeat]);
    }
}
