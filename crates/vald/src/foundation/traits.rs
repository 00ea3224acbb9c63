//! Core traits for the validation system
//!
//! This module defines the two contracts everything else is built on:
//! [`Checker`] for a single raw value and [`Validate`] for a unit that reads
//! from a [`Source`] and writes to a [`Sink`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{CheckError, Error};
use crate::sink::Sink;
use crate::source::Source;

/// Validated key/value pairs, as produced by [`ValidateExt::map`].
pub type Values = HashMap<String, String>;

// ============================================================================
// CHECKER
// ============================================================================

/// Normalizes or rejects the raw value of one field.
///
/// Checkers are pure: the output depends only on the input and on
/// configuration fixed at construction time. The input is never empty;
/// empty values mean "absent" and are handled before the checker runs.
///
/// The normalized value may borrow from the checker (an interned literal)
/// or from the input (pass-through).
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use vald::foundation::{CheckError, Checker};
///
/// struct Digits;
///
/// impl Checker for Digits {
///     fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
///         if raw.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(Cow::Borrowed(raw))
///         } else {
///             Err(CheckError::invalid_value(raw))
///         }
///     }
/// }
///
/// assert!(Digits.check("123").is_ok());
/// assert!(Digits.check("12a").is_err());
/// ```
pub trait Checker {
    /// Checks `raw`, returning its normalized form.
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError>;
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        (**self).check(raw)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        (**self).check(raw)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check<'a>(&'a self, raw: &'a str) -> Result<Cow<'a, str>, CheckError> {
        (**self).check(raw)
    }
}

// ============================================================================
// VALIDATE
// ============================================================================

/// A unit of validation: fetches fields from a source, checks them and
/// emits accepted pairs to a sink.
///
/// Implementations hold no mutable state. Every call is an independent
/// evaluation, so one validator can serve any number of concurrent calls
/// as long as each call brings its own source and sink.
pub trait Validate {
    /// Runs the validation, stopping at the first failure.
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error>;
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        (**self).validate(source, sink)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        (**self).validate(source, sink)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        (**self).validate(source, sink)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Convenience methods available on every [`Validate`] implementation.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use vald::prelude::*;
///
/// let validate = pack![req("name", pattern("^[a-z]+$")), opt_def("admin", boolean(), "false")];
///
/// let source = HashMap::from([("name", "alice")]);
/// let values = validate.map(&source).unwrap();
///
/// assert_eq!(values["name"], "alice");
/// assert_eq!(values["admin"], "false");
/// ```
pub trait ValidateExt: Validate {
    /// Runs the validation and collects the accepted pairs into a map.
    ///
    /// Returns no map at all on failure. A field emitted twice keeps the
    /// last value.
    fn map(&self, source: &dyn Source) -> Result<Values, Error> {
        let mut values = Values::new();
        self.validate(source, &mut values)?;
        Ok(values)
    }

    /// Runs the validation and collects the accepted pairs in emission order.
    fn collect(&self, source: &dyn Source) -> Result<Vec<(String, String)>, Error> {
        let mut pairs = Vec::new();
        self.validate(source, &mut pairs)?;
        Ok(pairs)
    }

    /// Erases the concrete type into a shareable [`Validator`].
    fn boxed(self) -> Validator
    where
        Self: Sized + Send + Sync + 'static,
    {
        Validator::new(self)
    }
}

impl<T: Validate + ?Sized> ValidateExt for T {}

// ============================================================================
// TYPE-ERASED VALIDATOR
// ============================================================================

/// A type-erased, cheaply clonable validator.
///
/// This is what [`Pack`](crate::combinators::Pack) and the branches of
/// [`Cond`](crate::combinators::Cond) hold, so validators of different
/// concrete types can be mixed.
#[derive(Clone)]
pub struct Validator(Arc<dyn Validate + Send + Sync>);

impl Validator {
    /// Wraps a concrete validator.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validate + Send + Sync + 'static,
    {
        Self(Arc::new(validator))
    }
}

impl Validate for Validator {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        self.0.validate(source, sink)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(<dyn Validate>)")
    }
}
