//! Word-count phrases ("single word", "two word strings")

use std::sync::LazyLock;

use regex::Regex;

use crate::nlq::{lexicon::resolve_number, ParseError, ParsedFilters};

static WORD_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:all\s+)?(one|single|double|triple|two|three|four|five|six|seven|eight|nine|ten)(?:\s+\w+)*\s+(?:word|string|text)s?\b",
    )
    .unwrap()
});

/// Only the first occurrence in the text is honored.
pub fn apply(text: &str, mut filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    let count = WORD_COUNT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| resolve_number(m.as_str()))
        .filter(|&n| n > 0);

    if let Some(count) = count {
        filters.word_count = Some(count);
    }
    Ok(filters)
}
