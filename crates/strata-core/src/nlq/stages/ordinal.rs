//! Ordinal character phrases ("third letter of the alphabet", "contain the first vowel")

use std::sync::LazyLock;

use regex::Regex;

use crate::nlq::lexicon::{ordinal_index, ALPHABET, CONSONANTS, VOWELS};
use crate::nlq::{ParseError, ParsedFilters};

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:contain(?:s|ing)?|include(?:s|ing)?|has|with|having|that\s+contain(?:s|ing)?|that\s+has)?\s*(?:the\s+)?(first|second|third|fourth|fifth|\d+(?:st|nd|rd|th))\s+(vowel|consonant|letter)(?:\s+of(?:\s+the)?\s+(word|alphabet))?",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Vowel,
    Consonant,
    Letter,
}

impl Kind {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "vowel" => Some(Kind::Vowel),
            "consonant" => Some(Kind::Consonant),
            "letter" => Some(Kind::Letter),
            _ => None,
        }
    }

    fn table(self) -> &'static [char] {
        match self {
            Kind::Vowel => &VOWELS,
            Kind::Consonant => &CONSONANTS,
            Kind::Letter => &ALPHABET,
        }
    }
}

/// When several ordinal phrases occur, the last one governs.
///
/// Scoped to `alphabet`, an out-of-range position is an error. A vowel or
/// consonant phrase without that scope ignores an out-of-range position, and
/// an unscoped `letter` phrase never sets a filter.
pub fn apply(text: &str, mut filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    let Some(caps) = ORDINAL_RE.captures_iter(text).last() else {
        return Ok(filters);
    };

    let ordinal = &caps[1];
    let Some(kind) = Kind::from_word(&caps[2]) else {
        return Ok(filters);
    };
    let alphabet_scope = caps.get(3).is_some_and(|m| m.as_str() == "alphabet");

    if kind == Kind::Letter && !alphabet_scope {
        return Ok(filters);
    }

    match nth(kind.table(), ordinal_index(ordinal)) {
        Some(c) => filters.contains_character = Some(c),
        None if alphabet_scope => {
            return Err(ParseError::unparseable(format!(
                "'{ordinal}' is out of range for {} entries",
                kind.table().len()
            )));
        }
        None => {}
    }
    Ok(filters)
}

/// One-based lookup.
fn nth(table: &[char], index: Option<u64>) -> Option<char> {
    let index = usize::try_from(index?).ok()?;
    index.checked_sub(1).and_then(|i| table.get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlq::ParseErrorKind;

    fn character(text: &str) -> Option<char> {
        apply(text, ParsedFilters::new()).unwrap().contains_character
    }

    #[test]
    fn test_letter_of_alphabet() {
        assert_eq!(character("third letter of the alphabet"), Some('c'));
        assert_eq!(character("26th letter of alphabet"), Some('z'));
        assert_eq!(character("1st letter of the alphabet"), Some('a'));
    }

    #[test]
    fn test_vowels() {
        assert_eq!(character("first vowel of the alphabet"), Some('a'));
        assert_eq!(character("contain the first vowel"), Some('a'));
        assert_eq!(character("strings that contain the fifth vowel of the word"), Some('u'));
    }

    #[test]
    fn test_consonants() {
        assert_eq!(character("second consonant of alphabet"), Some('c'));
        assert_eq!(character("has the 21st consonant"), Some('z'));
    }

    #[test]
    fn test_last_phrase_governs() {
        assert_eq!(
            character("first vowel or the second vowel of the alphabet"),
            Some('e')
        );
    }

    #[test]
    fn test_alphabet_scope_out_of_range_is_error() {
        for text in [
            "27th letter of the alphabet",
            "6th vowel of the alphabet",
            "22nd consonant of the alphabet",
            "0th letter of the alphabet",
        ] {
            let err = apply(text, ParsedFilters::new()).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Unparseable, "{text}");
        }
    }

    #[test]
    fn test_unscoped_out_of_range_is_ignored() {
        assert_eq!(character("6th vowel"), None);
        assert_eq!(character("the 9th vowel of the word"), None);
        assert_eq!(character("30th consonant"), None);
    }

    #[test]
    fn test_unscoped_letter_sets_nothing() {
        assert_eq!(character("third letter"), None);
        assert_eq!(character("second letter of the word"), None);
    }

    #[test]
    fn test_bare_numbers_are_not_ordinals() {
        assert_eq!(character("with 3 vowels"), None);
    }
}
