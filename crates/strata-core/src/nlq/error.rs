//! Natural-language query errors

use std::fmt;

use thiserror::Error;

/// Errors returned by [`crate::nlq::parse`].
///
/// Exactly two kinds exist. Both come from inspecting the input text; the
/// compiler performs no I/O and has no transient failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No recognizable structure, or a matched phrase referenced a number
    /// the lexicon cannot resolve.
    #[error("unable to parse natural language query: {reason}")]
    Unparseable { reason: String },

    /// Well-formed filters that cannot be satisfied together, or an
    /// unsupported request shape such as character exclusion.
    #[error("query parsed but resulted in conflicting filters: {reason}")]
    Conflicting { reason: String },
}

/// Discriminant of a [`ParseError`], for callers that only need the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    Unparseable,
    Conflicting,
}

impl ParseError {
    pub(crate) fn unparseable(reason: impl Into<String>) -> Self {
        ParseError::Unparseable {
            reason: reason.into(),
        }
    }

    pub(crate) fn conflicting(reason: impl Into<String>) -> Self {
        ParseError::Conflicting {
            reason: reason.into(),
        }
    }

    /// The error kind.
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::Unparseable { .. } => ParseErrorKind::Unparseable,
            ParseError::Conflicting { .. } => ParseErrorKind::Conflicting,
        }
    }

    /// Human-readable reason attached to the error.
    pub fn reason(&self) -> &str {
        match self {
            ParseError::Unparseable { reason } | ParseError::Conflicting { reason } => reason,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Unparseable => write!(f, "unparseable"),
            ParseErrorKind::Conflicting => write!(f, "conflicting"),
        }
    }
}
