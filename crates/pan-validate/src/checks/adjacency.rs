//! Adjacent repeated character detection.

use super::LETTER_BLOCK_LEN;

/// True if two neighbouring characters are equal within the first five.
///
/// Characters past the fifth are ignored. Shorter inputs only compare the
/// pairs they have.
pub fn has_adjacent_repeat(s: &str) -> bool {
    let mut chars = s.chars().take(LETTER_BLOCK_LEN);
    let Some(mut previous) = chars.next() else {
        return false;
    };
    for current in chars {
        if current == previous {
            return true;
        }
        previous = current;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_repeated_prefix() {
        assert!(has_adjacent_repeat("AAAAA12345"));
        assert!(has_adjacent_repeat("ABCDD1234F"));
        assert!(has_adjacent_repeat("AABCD1234F"));
    }

    #[test]
    fn clean_prefix() {
        assert!(!has_adjacent_repeat("ABCDE1234F"));
        assert!(!has_adjacent_repeat("ABABA1234F"));
    }

    #[test]
    fn ignores_repeats_after_fifth_character() {
        assert!(!has_adjacent_repeat("ABCDE1111F"));
        assert!(!has_adjacent_repeat("ABCDEE"));
    }

    #[test]
    fn short_input() {
        assert!(!has_adjacent_repeat(""));
        assert!(!has_adjacent_repeat("A"));
        assert!(has_adjacent_repeat("AA"));
        assert!(!has_adjacent_repeat("AB"));
    }
}
