//! Character containment phrases

use std::sync::LazyLock;

use regex::Regex;

use crate::nlq::{ParseError, ParsedFilters};

static CONTAINS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:contain(?:s|ing)?|include(?:s|ing)?|has|with|having)\s+(?:the\s+)?(?:letter\s+)?([a-z])\b",
    )
    .unwrap()
});

static NEGATIVE_CONTAINS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:does\s+not|doesn['’]?t|without|excluding|not)\b\s*(?:contain|include|have)\b")
        .unwrap()
});

/// Generic "contains the letter x". Skipped when an ordinal phrase already
/// chose a character; otherwise the last occurrence wins.
pub fn apply(text: &str, mut filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    if filters.contains_character.is_some() {
        return Ok(filters);
    }

    let last = CONTAINS_RE
        .captures_iter(text)
        .last()
        .and_then(|caps| caps[1].chars().next());

    if let Some(c) = last {
        filters.contains_character = Some(c);
    }
    Ok(filters)
}

/// Character exclusion is not supported; any such phrase rejects the whole query.
pub fn reject_negative(text: &str, filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    if let Some(m) = NEGATIVE_CONTAINS_RE.find(text) {
        return Err(ParseError::conflicting(format!(
            "character exclusion ('{}') is not supported",
            m.as_str()
        )));
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlq::ParseErrorKind;

    fn character(text: &str) -> Option<char> {
        apply(text, ParsedFilters::new()).unwrap().contains_character
    }

    #[test]
    fn test_contains_letter() {
        assert_eq!(character("contains the letter z"), Some('z'));
        assert_eq!(character("strings having q"), Some('q'));
        assert_eq!(character("words that include the k"), Some('k'));
    }

    #[test]
    fn test_last_occurrence_wins() {
        assert_eq!(character("with letter a or with letter b"), Some('b'));
    }

    #[test]
    fn test_requires_single_letter_word() {
        assert_eq!(character("contains the letters"), None);
        assert_eq!(character("with lots"), None);
    }

    #[test]
    fn test_ordinal_result_is_kept() {
        let filters = ParsedFilters {
            contains_character: Some('e'),
            ..Default::default()
        };
        let filters = apply("contains the letter z", filters).unwrap();
        assert_eq!(filters.contains_character, Some('e'));
    }

    #[test]
    fn test_negative_contains_is_conflicting() {
        for text in [
            "does not contain a",
            "strings that doesn't include q",
            "without contain",
            "not have z",
        ] {
            let err = reject_negative(text, ParsedFilters::new()).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Conflicting, "{text}");
        }
    }

    #[test]
    fn test_negative_contains_ignores_unrelated_negation() {
        assert!(reject_negative("not a palindrome", ParsedFilters::new()).is_ok());
        assert!(reject_negative("contains the letter a", ParsedFilters::new()).is_ok());
    }
}
