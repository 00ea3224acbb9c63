//! Boolean parsing

use std::borrow::Cow;

use crate::foundation::{CheckError, Checker};

/// Accepts the usual boolean spellings and normalizes them to `"true"` or
/// `"false"`.
///
/// | true                                  | false                                 |
/// |---------------------------------------|---------------------------------------|
/// | `1` `t` `T` `TRUE` `true` `True`      | `0` `f` `F` `FALSE` `false` `False`   |
///
/// Anything else, including `yes`/`no` and mixed case like `tRUE`, fails
/// with an "invalid syntax" error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool;

impl Checker for Bool {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        match parse_bool(raw) {
            Some(true) => Ok(Cow::Borrowed("true")),
            Some(false) => Ok(Cow::Borrowed("false")),
            None => Err(CheckError::invalid_syntax(raw)),
        }
    }
}

/// Parses one of the accepted boolean spellings.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Creates a boolean checker.
#[must_use]
pub const fn boolean() -> Bool {
    Bool
}
