//! Field validators - `Req`, `Opt` and `OptDef`
//!
//! Each of these binds one field name to one [`Checker`]. They differ only
//! in what happens when the field is absent:
//!
//! | validator | absent field                         |
//! |-----------|--------------------------------------|
//! | [`Req`]   | fails with [`Error::MissingValue`]   |
//! | [`Opt`]   | succeeds, nothing is emitted         |
//! | [`OptDef`]| emits the default, unchecked         |
//!
//! A present field is always checked and, if accepted, emitted with its
//! normalized value.

use std::borrow::Cow;

use crate::foundation::error::or_panic;
use crate::foundation::{Checker, ConfigError, Error, Validate};
use crate::sink::Sink;
use crate::source::{Source, fetch};

// ============================================================================
// EVALUATION DRIVER
// ============================================================================

/// Checks a present value and forwards the normalized result to the sink.
///
/// Checker failures get scoped to `field`. Sink failures are passed through
/// untouched.
pub(crate) fn accept<C>(
    field: &str,
    raw: &str,
    checker: &C,
    sink: &mut dyn Sink,
) -> Result<(), Error>
where
    C: Checker + ?Sized,
{
    let value = checker.check(raw).map_err(|err| {
        tracing::debug!(field = %field, error = %err, "field rejected");
        Error::invalid(field.to_owned(), err)
    })?;

    tracing::trace!(field = %field, "field accepted");
    sink.consume(field, &value).map_err(Error::Sink)
}

pub(crate) fn field_name(
    field: impl Into<Cow<'static, str>>,
) -> Result<Cow<'static, str>, ConfigError> {
    let field = field.into();
    if field.is_empty() {
        return Err(ConfigError::EmptyFieldName);
    }
    Ok(field)
}

// ============================================================================
// REQ
// ============================================================================

/// A required field.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use vald::prelude::*;
///
/// let validate = req("ddd", boolean());
///
/// let err = validate.map(&HashMap::from([("eee", "1")])).unwrap_err();
/// assert_eq!(err.to_string(), r#"parameter "ddd": missing value"#);
/// ```
#[derive(Debug, Clone)]
pub struct Req<C> {
    field: Cow<'static, str>,
    checker: C,
}

impl<C> Req<C> {
    /// Creates a required-field validator.
    pub fn try_new(field: impl Into<Cow<'static, str>>, checker: C) -> Result<Self, ConfigError> {
        Ok(Self {
            field: field_name(field)?,
            checker,
        })
    }

    /// Returns the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the checker.
    pub fn checker(&self) -> &C {
        &self.checker
    }
}

impl<C: Checker> Validate for Req<C> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        if let Some(raw) = fetch(source, &self.field) {
            accept(&self.field, &raw, &self.checker, sink)
        } else {
            tracing::debug!(field = %self.field, "required field missing");
            Err(Error::missing(self.field.clone()))
        }
    }
}

/// Creates a required-field validator.
///
/// # Panics
///
/// Panics if `field` is empty.
#[track_caller]
pub fn req<C: Checker>(field: impl Into<Cow<'static, str>>, checker: C) -> Req<C> {
    or_panic(Req::try_new(field, checker), "req")
}

// ============================================================================
// OPT
// ============================================================================

/// An optional field. Absent means nothing is emitted.
#[derive(Debug, Clone)]
pub struct Opt<C> {
    field: Cow<'static, str>,
    checker: C,
}

impl<C> Opt<C> {
    /// Creates an optional-field validator.
    pub fn try_new(field: impl Into<Cow<'static, str>>, checker: C) -> Result<Self, ConfigError> {
        Ok(Self {
            field: field_name(field)?,
            checker,
        })
    }

    /// Returns the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the checker.
    pub fn checker(&self) -> &C {
        &self.checker
    }
}

impl<C: Checker> Validate for Opt<C> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        match fetch(source, &self.field) {
            Some(raw) => accept(&self.field, &raw, &self.checker, sink),
            None => Ok(()),
        }
    }
}

/// Creates an optional-field validator.
///
/// # Panics
///
/// Panics if `field` is empty.
#[track_caller]
pub fn opt<C: Checker>(field: impl Into<Cow<'static, str>>, checker: C) -> Opt<C> {
    or_panic(Opt::try_new(field, checker), "opt")
}

// ============================================================================
// OPT DEF
// ============================================================================

/// An optional field with a default.
///
/// When the field is absent the default is emitted as is. It is never run
/// through the checker, so it may be a value the checker would reject.
///
/// ```rust
/// use std::collections::HashMap;
/// use vald::prelude::*;
///
/// let validate = opt_def("AAA", pattern("^[A-Z]{3}$"), "none");
///
/// let values = validate.map(&HashMap::<String, String>::new()).unwrap();
/// assert_eq!(values["AAA"], "none");
/// ```
#[derive(Debug, Clone)]
pub struct OptDef<C> {
    field: Cow<'static, str>,
    checker: C,
    default: Cow<'static, str>,
}

impl<C> OptDef<C> {
    /// Creates an optional-field validator with a default value.
    pub fn try_new(
        field: impl Into<Cow<'static, str>>,
        checker: C,
        default: impl Into<Cow<'static, str>>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            field: field_name(field)?,
            checker,
            default: default.into(),
        })
    }

    /// Returns the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the checker.
    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Returns the default value.
    pub fn default_value(&self) -> &str {
        &self.default
    }
}

impl<C: Checker> Validate for OptDef<C> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        if let Some(raw) = fetch(source, &self.field) {
            accept(&self.field, &raw, &self.checker, sink)
        } else {
            tracing::trace!(field = %self.field, "field defaulted");
            sink.consume(&self.field, &self.default)
                .map_err(Error::Sink)
        }
    }
}

/// Creates an optional-field validator with a default value.
///
/// # Panics
///
/// Panics if `field` is empty.
#[track_caller]
pub fn opt_def<C: Checker>(
    field: impl Into<Cow<'static, str>>,
    checker: C,
    default: impl Into<Cow<'static, str>>,
) -> OptDef<C> {
    or_panic(OptDef::try_new(field, checker, default), "opt_def")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{boolean, one_of};
    use crate::foundation::ValidateExt;
    use std::collections::HashMap;

    fn source(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_req_present() {
        let v = req("isOK", boolean());
        let values = v.map(&source(&[("isOK", "1")])).unwrap();
        assert_eq!(values["isOK"], "true");
    }

    #[test]
    fn test_req_absent_and_empty() {
        let v = req("ddd", boolean());
        assert!(v.map(&source(&[])).unwrap_err().is_missing());
        assert!(v.map(&source(&[("ddd", "")])).unwrap_err().is_missing());
    }

    #[test]
    fn test_req_rejected() {
        let v = req("aaa", one_of(["xxx", "yyy", "zzz"]));
        let err = v.map(&source(&[("aaa", "XXX")])).unwrap_err();
        assert_eq!(err.to_string(), r#"parameter "aaa": invalid value: "XXX""#);
    }

    #[test]
    fn test_opt_absent_emits_nothing() {
        let v = opt("aaa", boolean());
        assert!(v.collect(&source(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_opt_present_is_checked() {
        let v = opt("aaa", boolean());
        assert_eq!(v.map(&source(&[("aaa", "F")])).unwrap()["aaa"], "false");
        assert!(v.map(&source(&[("aaa", "maybe")])).unwrap_err().is_invalid());
    }

    #[test]
    fn test_opt_def_default_is_not_checked() {
        let v = opt_def("flag", boolean(), "not a bool");
        assert_eq!(v.default_value(), "not a bool");
        assert_eq!(v.map(&source(&[])).unwrap()["flag"], "not a bool");
        assert_eq!(v.map(&source(&[("flag", "t")])).unwrap()["flag"], "true");
    }

    #[test]
    fn test_sink_error_is_not_field_scoped() {
        let v = req("aaa", boolean());
        let mut sink = crate::sink::from_fn(|_, _| Err("sink is full".into()));
        let err = v.validate(&source(&[("aaa", "1")]), &mut sink).unwrap_err();
        assert_eq!(err.to_string(), "sink is full");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_empty_field_name_rejected() {
        assert!(matches!(
            Req::try_new("", boolean()),
            Err(ConfigError::EmptyFieldName)
        ));
        assert!(Opt::try_new(String::new(), boolean()).is_err());
        assert!(OptDef::try_new("", boolean(), "x").is_err());
    }

    #[test]
    #[should_panic(expected = "vald::req(): empty field name")]
    fn test_req_panics_on_empty_name() {
        let _ = req("", boolean());
    }
}
