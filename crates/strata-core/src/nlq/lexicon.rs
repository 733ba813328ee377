//! Number lexicon and letter tables
//!
//! A closed vocabulary: decimal numerals (optionally with an ordinal suffix)
//! and a fixed table of English number words. Nothing outside these tables
//! resolves.

/// Number words recognized by [`resolve_number`].
pub const NUMBER_WORDS: &[(&str, u64)] = &[
    ("one", 1),
    ("single", 1),
    ("double", 2),
    ("triple", 3),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
];

/// Ordinal words accepted by the ordinal-character matcher.
pub const ORDINAL_WORDS: &[(&str, u64)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
];

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Resolve a number token to an integer.
///
/// A trailing ordinal suffix (`st`, `nd`, `rd`, `th`) is stripped first, case
/// insensitively. The remainder resolves through its leading decimal digits,
/// then through [`NUMBER_WORDS`]. Returns `None` when neither applies.
///
/// ```rust
/// use strata_core::nlq::resolve_number;
///
/// assert_eq!(resolve_number("three"), Some(3));
/// assert_eq!(resolve_number("3rd"), Some(3));
/// assert_eq!(resolve_number("dozen"), None);
/// ```
pub fn resolve_number(token: &str) -> Option<u64> {
    let lower = token.to_lowercase();
    let stem = strip_ordinal_suffix(&lower);
    leading_integer(stem).or_else(|| word_value(stem))
}

/// Resolve an ordinal position: a lexicon number, else an ordinal word.
///
/// Position 0 is not a position and yields `None`.
pub fn ordinal_index(token: &str) -> Option<u64> {
    resolve_number(token)
        .filter(|&n| n != 0)
        .or_else(|| lookup(ORDINAL_WORDS, &token.to_lowercase()))
}

fn strip_ordinal_suffix(token: &str) -> &str {
    ORDINAL_SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}

fn leading_integer(s: &str) -> Option<u64> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

fn word_value(word: &str) -> Option<u64> {
    lookup(NUMBER_WORDS, word)
}

fn lookup(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordinal_form(n: u64) -> String {
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{n}{suffix}")
    }

    #[test]
    fn test_words_digits_and_ordinals_agree() {
        for (word, n) in NUMBER_WORDS {
            let by_word = resolve_number(word);
            assert_eq!(by_word, Some(*n), "word {word}");
            assert_eq!(by_word, resolve_number(&n.to_string()), "digits for {word}");
            assert_eq!(by_word, resolve_number(&ordinal_form(*n)), "ordinal for {word}");
        }
    }

    #[test]
    fn test_suffix_is_case_insensitive() {
        assert_eq!(resolve_number("21ST"), Some(21));
        assert_eq!(resolve_number("Seven"), Some(7));
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(resolve_number("0"), Some(0));
        assert_eq!(resolve_number("42"), Some(42));
        assert_eq!(resolve_number("12abc"), Some(12));
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(resolve_number(""), None);
        assert_eq!(resolve_number("a"), None);
        assert_eq!(resolve_number("thirty"), None);
        assert_eq!(resolve_number("99999999999999999999999"), None);
    }

    #[test]
    fn test_ordinal_index() {
        assert_eq!(ordinal_index("first"), Some(1));
        assert_eq!(ordinal_index("second"), Some(2));
        assert_eq!(ordinal_index("third"), Some(3));
        assert_eq!(ordinal_index("fourth"), Some(4));
        assert_eq!(ordinal_index("fifth"), Some(5));
        assert_eq!(ordinal_index("12th"), Some(12));
        assert_eq!(ordinal_index("0th"), None);
    }

    #[test]
    fn test_tables() {
        assert_eq!(CONSONANTS.len() + VOWELS.len(), ALPHABET.len());
        assert!(CONSONANTS.iter().all(|c| !VOWELS.contains(c)));
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
        assert!(CONSONANTS.windows(2).all(|w| w[0] < w[1]));
    }
}
