//! Regular expression matching

use std::borrow::Cow;

use regex::Regex;

use crate::foundation::error::or_panic;
use crate::foundation::{CheckError, Checker, ConfigError};

/// Accepts values matching a regular expression, unchanged.
///
/// The pattern is compiled once, at construction. Anchors are up to the
/// caller: `[a-z]{3}` matches anywhere in the value, `^[a-z]{3}$` only the
/// whole value.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`.
    pub fn try_new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Wraps an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// Returns the source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Checker for Pattern {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        if self.regex.is_match(raw) {
            Ok(Cow::Borrowed(raw))
        } else {
            Err(CheckError::invalid_value(raw))
        }
    }
}

/// Creates a pattern-match checker.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
#[track_caller]
pub fn pattern(pattern: &str) -> Pattern {
    or_panic(Pattern::try_new(pattern), "pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_match_returns_input() {
        let checker = pattern("^[a-z]{3}$");
        assert_eq!(checker.check("yyy").unwrap(), "yyy");
        assert_eq!(checker.as_str(), "^[a-z]{3}$");
    }

    #[test]
    fn test_pattern_mismatch() {
        let err = pattern("^[a-z]{3}$").check("XXX").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid value: "XXX""#);
    }

    #[test]
    fn test_unanchored_pattern() {
        assert!(pattern("[0-9]").check("abc1").is_ok());
    }

    #[test]
    fn test_from_regex() {
        let checker = Pattern::from_regex(Regex::new("^x+$").unwrap());
        assert!(checker.check("xxx").is_ok());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            Pattern::try_new("(unclosed"),
            Err(ConfigError::InvalidPattern(_))
        ));
    }

    #[test]
    #[should_panic(expected = "vald::pattern(): invalid pattern")]
    fn test_invalid_pattern_panics() {
        let _ = pattern("[");
    }
}
