//! Core validation types and traits
//!
//! - **Traits**: [`Checker`], [`Validate`], [`ValidateExt`]
//! - **Handle**: [`Validator`], the type-erased form used for composition
//! - **Errors**: [`Error`], [`CheckError`], [`ConfigError`]
//!
//! # Architecture
//!
//! Validation is split into two layers.
//!
//! A [`Checker`] looks at one raw string and either normalizes it or
//! rejects it. It never sees field names, sources or sinks.
//!
//! A [`Validate`] implementation owns one or more field names, fetches
//! their values from a [`Source`](crate::source::Source), runs checkers and
//! hands accepted pairs to a [`Sink`](crate::sink::Sink). The field
//! validators in [`combinators`](crate::combinators) attach the field name
//! to checker failures.
//!
//! ```rust
//! use std::collections::HashMap;
//! use vald::prelude::*;
//!
//! let validate = pack![
//!     req("plan", one_of(["free", "pro"])),
//!     opt("newsletter", boolean()),
//! ];
//!
//! let source = HashMap::from([("plan", "pro"), ("newsletter", "T")]);
//! let values = validate.map(&source).unwrap();
//! assert_eq!(values["newsletter"], "true");
//! ```

pub mod error;
pub mod traits;

pub use error::{BoxError, CheckError, ConfigError, Error};
pub use traits::{Checker, Validate, ValidateExt, Validator, Values};

/// A validation result using the evaluation [`Error`].
pub type ValidationResult<T> = Result<T, Error>;
