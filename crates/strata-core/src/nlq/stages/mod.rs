//! Matcher stages
//!
//! Each stage reads the normalized text and returns the updated accumulator.
//! Stages never see each other's state except through the accumulator, so the
//! order of [`STAGES`] is the whole precedence story:
//!
//! 1. palindrome (negative cues before affirmative)
//! 2. word count
//! 3. length range
//! 4. ordinal character
//! 5. generic contains-character (only if the ordinal stage set nothing)
//! 6. negative contains (rejects everything accumulated so far)

mod contains;
mod length;
mod ordinal;
mod palindrome;
mod word_count;

use super::{ParseError, ParsedFilters};

/// A matcher stage: `(normalized text, accumulator) -> accumulator`.
pub type Stage = fn(&str, ParsedFilters) -> Result<ParsedFilters, ParseError>;

/// Matcher stages in execution order.
pub const STAGES: &[(&str, Stage)] = &[
    ("palindrome", palindrome::apply),
    ("word_count", word_count::apply),
    ("length", length::apply),
    ("ordinal_character", ordinal::apply),
    ("contains_character", contains::apply),
    ("negative_contains", contains::reject_negative),
];
