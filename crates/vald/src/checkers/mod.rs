//! Built-in checkers
//!
//! - [`OneOf`] — membership in a fixed set of literals
//! - [`Pattern`] — regular expression match (feature `pattern`)
//! - [`Bool`] — boolean spellings, normalized to `"true"` / `"false"`
//! - [`FnChecker`] — any closure, via [`from_fn`]

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{CheckError, Checker};

pub mod boolean;
pub mod one_of;
#[cfg(feature = "pattern")]
pub mod pattern;

pub use boolean::{Bool, boolean, parse_bool};
pub use one_of::{OneOf, one_of};
#[cfg(feature = "pattern")]
pub use pattern::{Pattern, pattern};

/// A checker backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnChecker<F> {
    check: F,
}

impl<F> Checker for FnChecker<F>
where
    F: Fn(&str) -> Result<String, CheckError>,
{
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        (self.check)(raw).map(Cow::Owned)
    }
}

impl<F> fmt::Debug for FnChecker<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnChecker")
            .field("check", &"<function>")
            .finish()
    }
}

/// Creates a checker from a closure.
///
/// ```rust
/// use vald::checkers;
/// use vald::foundation::{CheckError, Checker};
///
/// let port = checkers::from_fn(|raw| match raw.parse::<u16>() {
///     Ok(port) if port > 0 => Ok(port.to_string()),
///     _ => Err(CheckError::invalid_value(raw)),
/// });
///
/// assert_eq!(port.check("0080").unwrap(), "80");
/// assert!(port.check("0").is_err());
/// ```
pub fn from_fn<F>(check: F) -> FnChecker<F>
where
    F: Fn(&str) -> Result<String, CheckError>,
{
    FnChecker { check }
}
