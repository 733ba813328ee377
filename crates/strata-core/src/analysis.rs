//! Derived properties of stored strings

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Properties computed once when a string is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters (Unicode scalar values)
    pub length: u64,

    /// Case- and whitespace-insensitive palindrome check
    pub is_palindrome: bool,

    /// Distinct non-whitespace characters, case-sensitive
    pub unique_characters: u64,

    /// Whitespace-separated words
    pub word_count: u64,

    pub sha256_hash: String,

    /// Occurrences of every character except the space character
    pub character_frequency_map: BTreeMap<String, u64>,
}

/// Analyze a string value.
pub fn analyze(value: &str) -> StringProperties {
    let non_whitespace: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();

    let unique_characters = non_whitespace.iter().collect::<HashSet<_>>().len() as u64;

    let mut character_frequency_map = BTreeMap::new();
    for c in value.chars().filter(|&c| c != ' ') {
        *character_frequency_map.entry(c.to_string()).or_insert(0) += 1;
    }

    StringProperties {
        length: value.chars().count() as u64,
        is_palindrome: is_palindrome(value),
        unique_characters,
        word_count: value.split_whitespace().count() as u64,
        sha256_hash: sha256_hex(value),
        character_frequency_map,
    }
}

/// Palindrome check ignoring whitespace and case.
pub fn is_palindrome(value: &str) -> bool {
    let folded: Vec<char> = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    folded.iter().eq(folded.iter().rev())
}

/// Lowercase hex SHA-256 of the UTF-8 bytes.
pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Content-addressed record id for a value.
pub fn record_id(value: &str) -> String {
    sha256_hex(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analyze() {
        let props = analyze("Never odd or even");
        assert_eq!(props.length, 17);
        assert!(props.is_palindrome);
        assert_eq!(props.word_count, 4);
        // N e v r o d n
        assert_eq!(props.unique_characters, 7);
        assert_eq!(props.character_frequency_map.get("e"), Some(&4));
        assert_eq!(props.character_frequency_map.get("N"), Some(&1));
        assert!(!props.character_frequency_map.contains_key(" "));
    }

    #[test]
    fn test_not_palindrome() {
        assert!(!is_palindrome("hello world"));
        assert!(is_palindrome("Racecar"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_word_count_blank() {
        assert_eq!(analyze("   ").word_count, 0);
        assert_eq!(analyze("  two  words ").word_count, 2);
    }

    #[test]
    fn test_sha256() {
        assert_eq!(
            sha256_hex("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
        assert_eq!(record_id("hello"), analyze("hello").sha256_hash);
    }
}
