//! Query normalization

use super::error::ParseError;

/// Lowercase and trim a raw query.
///
/// Fails with `Unparseable` when the text is empty or holds no ASCII letter,
/// digit, or whitespace after lowercasing.
pub fn normalize(raw: &str) -> Result<String, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::unparseable("empty query"));
    }

    let normalized = raw.to_lowercase().trim().to_string();

    let recognizable = normalized
        .chars()
        .any(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace());
    if !recognizable {
        return Err(ParseError::unparseable("query has no letters or digits"));
    }

    Ok(normalized)
}
