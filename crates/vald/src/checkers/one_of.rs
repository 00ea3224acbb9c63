//! Enumeration membership

use std::borrow::Cow;
use std::collections::HashSet;

use crate::foundation::error::or_panic;
use crate::foundation::{CheckError, Checker, ConfigError};

/// Accepts one of a fixed set of literals.
///
/// The accepted value is returned as the literal stored in the set, so the
/// sink always sees the canonical copy.
///
/// # Examples
///
/// ```rust
/// use vald::prelude::*;
///
/// let plan = one_of(["free", "pro"]);
/// assert_eq!(plan.check("pro").unwrap(), "pro");
/// assert_eq!(plan.check("PRO").unwrap_err().to_string(), r#"invalid value: "PRO""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOf {
    literals: HashSet<Box<str>>,
}

impl OneOf {
    /// Creates the checker from a non-empty list of non-empty literals.
    pub fn try_new<I, S>(literals: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = HashSet::new();
        for (index, literal) in literals.into_iter().enumerate() {
            let literal: String = literal.into();
            if literal.is_empty() {
                return Err(ConfigError::EmptyLiteral { index });
            }
            set.insert(literal.into_boxed_str());
        }

        if set.is_empty() {
            return Err(ConfigError::EmptyLiteralList);
        }
        Ok(Self { literals: set })
    }

    /// Returns `true` if `value` is one of the literals.
    pub fn contains(&self, value: &str) -> bool {
        self.literals.contains(value)
    }

    /// Number of distinct literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Always `false`; the set is never empty.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Checker for OneOf {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        self.literals
            .get(raw)
            .map(|literal| Cow::Borrowed(&**literal))
            .ok_or_else(|| CheckError::invalid_value(raw))
    }
}

/// Creates an enumeration-membership checker.
///
/// # Panics
///
/// Panics if `literals` is empty or contains an empty literal.
#[track_caller]
pub fn one_of<I, S>(literals: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    or_panic(OneOf::try_new(literals), "one_of")
}
