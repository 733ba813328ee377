//! Length-range phrases
//!
//! Five phrase families, each matched at every occurrence in the text:
//!
//! ```text
//! longer  ::= (longer|greater|more|exceeding|beyond|higher|over|above) [word(s)] [than] N   min >= N+1
//! shorter ::= (shorter|less|fewer|below|under|not up to) [word(s)] [than] N              max <= N-1
//! between ::= (between|from) N (and|to) M                                                 min = N, max = M
//! atleast ::= (at least|min|minimum) N                                                    min >= N
//! atmost  ::= (at most|max|maximum) N                                                     max <= N
//! ```
//!
//! Repeated bounds fold to the most restrictive one. A `between` clause
//! overrides whatever the longer/shorter families produced; at-least and
//! at-most clauses still fold on top of it.

use std::sync::LazyLock;

use regex::Regex;

use crate::nlq::{lexicon::resolve_number, ParseError, ParsedFilters};

static LONGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:longer|greater|more|exceeding|beyond|higher|over|above)\s+(?:words?\s+)?(?:than\s+)?(\w+)",
    )
    .unwrap()
});

static SHORTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:shorter|less|fewer|below|under|not\s+up\s+to)\s+(?:words?\s+)?(?:than\s+)?(\w+)")
        .unwrap()
});

static BETWEEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:between|from)\s+(\w+)\s+(?:and|to)\s+(\w+)").unwrap()
});

static AT_LEAST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:at\s+least|min(?:imum)?)\s+(\w+)").unwrap());

static AT_MOST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:at\s+most|max(?:imum)?)\s+(\w+)").unwrap());

pub fn apply(text: &str, mut filters: ParsedFilters) -> Result<ParsedFilters, ParseError> {
    let mut min = filters.min_length;
    let mut max = filters.max_length;

    for n in numbers(&LONGER_RE, text) {
        min = raise(min, n.saturating_add(1));
    }

    for n in numbers(&SHORTER_RE, text) {
        let bound = n.checked_sub(1).ok_or_else(|| {
            ParseError::conflicting(format!("no string is shorter than {n} characters"))
        })?;
        max = lower(max, bound);
    }

    for caps in BETWEEN_RE.captures_iter(text) {
        let (low_token, high_token) = (&caps[1], &caps[2]);
        let (Some(low), Some(high)) = (resolve_number(low_token), resolve_number(high_token))
        else {
            return Err(ParseError::unparseable(format!(
                "cannot resolve range '{low_token}' to '{high_token}'"
            )));
        };
        if low >= high {
            return Err(ParseError::conflicting(format!(
                "range lower bound {low} is not below upper bound {high}"
            )));
        }
        min = Some(low);
        max = Some(high);
    }

    for n in numbers(&AT_LEAST_RE, text) {
        min = raise(min, n);
    }

    for n in numbers(&AT_MOST_RE, text) {
        max = lower(max, n);
    }

    filters.min_length = min;
    filters.max_length = max;
    Ok(filters)
}

/// Resolved numbers from every match of `re`; unresolvable tokens are skipped.
fn numbers<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = u64> + 'a {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| resolve_number(m.as_str())))
}

fn raise(current: Option<u64>, bound: u64) -> Option<u64> {
    Some(current.map_or(bound, |c| c.max(bound)))
}

fn lower(current: Option<u64>, bound: u64) -> Option<u64> {
    Some(current.map_or(bound, |c| c.min(bound)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlq::ParseErrorKind;

    fn bounds(text: &str) -> (Option<u64>, Option<u64>) {
        let filters = apply(text, ParsedFilters::new()).unwrap();
        (filters.min_length, filters.max_length)
    }

    fn error_kind(text: &str) -> ParseErrorKind {
        apply(text, ParsedFilters::new()).unwrap_err().kind()
    }

    #[test]
    fn test_longer_is_exclusive() {
        assert_eq!(bounds("longer than 5"), (Some(6), None));
        assert_eq!(bounds("strings longer than ten"), (Some(11), None));
        assert_eq!(bounds("above 3"), (Some(4), None));
    }

    #[test]
    fn test_shorter_is_exclusive() {
        assert_eq!(bounds("shorter than 5"), (None, Some(4)));
        assert_eq!(bounds("fewer than twenty"), (None, Some(19)));
        assert_eq!(bounds("not up to 8"), (None, Some(7)));
    }

    #[test]
    fn test_inclusive_bounds() {
        assert_eq!(bounds("at least 4"), (Some(4), None));
        assert_eq!(bounds("minimum 2"), (Some(2), None));
        assert_eq!(bounds("at most 9"), (None, Some(9)));
        assert_eq!(bounds("max 7"), (None, Some(7)));
    }

    #[test]
    fn test_most_restrictive_bound_wins() {
        assert_eq!(bounds("longer than 3 and longer than 8"), (Some(9), None));
        assert_eq!(bounds("longer than 8 and at least 2"), (Some(9), None));
        assert_eq!(bounds("shorter than 20 and at most 10"), (None, Some(10)));
        assert_eq!(bounds("at most 4 and shorter than 30"), (None, Some(4)));
    }

    #[test]
    fn test_between_overrides() {
        assert_eq!(bounds("between 3 and 10"), (Some(3), Some(10)));
        assert_eq!(bounds("from two to six"), (Some(2), Some(6)));
        assert_eq!(
            bounds("longer than 50 and between 3 and 10"),
            (Some(3), Some(10))
        );
    }

    #[test]
    fn test_inclusive_bounds_fold_after_between() {
        assert_eq!(
            bounds("between 3 and 10 with at least 5"),
            (Some(5), Some(10))
        );
    }

    #[test]
    fn test_between_errors() {
        assert_eq!(error_kind("between 10 and 3"), ParseErrorKind::Conflicting);
        assert_eq!(error_kind("between 4 and 4"), ParseErrorKind::Conflicting);
        assert_eq!(error_kind("from a to z"), ParseErrorKind::Unparseable);
    }

    #[test]
    fn test_shorter_than_zero() {
        assert_eq!(error_kind("shorter than 0"), ParseErrorKind::Conflicting);
    }

    #[test]
    fn test_unresolved_numbers_are_skipped() {
        assert_eq!(bounds("longer than usual"), (None, None));
        assert_eq!(bounds("more than a few"), (None, None));
    }
}
