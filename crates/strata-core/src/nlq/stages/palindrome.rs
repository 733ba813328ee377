//! Palindrome cues

use std::sync::LazyLock;

use regex::Regex;

use crate::nlq::{ParseError, ParsedFilters};

static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(non[-\s]?palindromic|not\s+(?:a\s+)?palindrome|isn['’]?t\s+(?:a\s+)?palindrome|aren['’]?t\s+palindromes?)\b",
    )
    .unwrap()
});

static AFFIRMATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(palindromic|palindromes?|are\s+palindromes?|is\s+a\s+palindrome)\b").unwrap()
});

/// Negative cues are checked first and lock the flag; an affirmative cue
/// only applies when nothing has set it.
pub fn apply(text: &str, mut filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    if NEGATIVE_RE.is_match(text) {
        filters.is_palindrome = Some(false);
    }
    if AFFIRMATIVE_RE.is_match(text) && filters.is_palindrome.is_none() {
        filters.is_palindrome = Some(true);
    }
    Ok(filters)
}
