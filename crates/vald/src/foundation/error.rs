//! Error types for validation failures
//!
//! Three families, split by who caused the failure:
//!
//! - [`CheckError`] — a checker rejected a raw value. Knows nothing about
//!   the field it came from.
//! - [`Error`] — an evaluation failed: missing field, rejected value
//!   (field-scoped [`CheckError`]) or a failing sink.
//! - [`ConfigError`] — a validator could not be constructed. These are
//!   programmer errors and are surfaced at construction time.

use std::borrow::Cow;

/// Boxed error produced by a [`Sink`](crate::sink::Sink).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// CHECK ERROR
// ============================================================================

/// A checker rejected a raw value.
///
/// Carries a short reason and the offending raw value. The field name is
/// attached by the evaluation driver, see [`Error::InvalidValue`].
///
/// # Examples
///
/// ```rust
/// use vald::foundation::CheckError;
///
/// let err = CheckError::invalid_value("XXX");
/// assert_eq!(err.to_string(), r#"invalid value: "XXX""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}: {value:?}")]
pub struct CheckError {
    reason: Cow<'static, str>,
    value: String,
}

impl CheckError {
    /// Creates a new check error with a reason and the rejected value.
    pub fn new(reason: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            value: value.into(),
        }
    }

    /// The value is well-formed but not acceptable (not in a set, no match).
    pub fn invalid_value(value: impl Into<String>) -> Self {
        Self::new("invalid value", value)
    }

    /// The value could not be parsed at all.
    pub fn invalid_syntax(value: impl Into<String>) -> Self {
        Self::new("invalid syntax", value)
    }

    /// Returns the reason of the rejection.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the rejected raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// EVALUATION ERROR
// ============================================================================

/// A validation run failed.
///
/// Evaluation stops at the first failure, so one run yields at most one
/// error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field is absent from the source.
    #[error("parameter {field:?}: missing value")]
    MissingValue {
        /// Name of the missing field.
        field: Cow<'static, str>,
    },

    /// The checker rejected the field's value.
    #[error("parameter {field:?}: {source}")]
    InvalidValue {
        /// Name of the rejected field.
        field: Cow<'static, str>,
        /// What the checker said about the value.
        #[source]
        source: CheckError,
    },

    /// The sink refused an accepted pair. Reported as the sink produced it.
    #[error(transparent)]
    Sink(BoxError),
}

impl Error {
    /// Creates a missing-value error for `field`.
    pub fn missing(field: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingValue {
            field: field.into(),
        }
    }

    /// Scopes a checker failure to `field`.
    pub fn invalid(field: impl Into<Cow<'static, str>>, source: CheckError) -> Self {
        Self::InvalidValue {
            field: field.into(),
            source,
        }
    }

    /// Wraps a sink failure.
    pub fn sink(error: impl Into<BoxError>) -> Self {
        Self::Sink(error.into())
    }

    /// Returns the field this error is about, if it is field-scoped.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingValue { field } | Self::InvalidValue { field, .. } => Some(field.as_ref()),
            Self::Sink(_) => None,
        }
    }

    /// Returns `true` for [`Error::MissingValue`].
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }

    /// Returns `true` for [`Error::InvalidValue`].
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Returns the checker failure behind an [`Error::InvalidValue`].
    #[must_use]
    pub fn check_error(&self) -> Option<&CheckError> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A validator or checker was misconfigured.
///
/// Returned by the `try_*` constructors. The plain constructors panic with
/// this error's message instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `Pack` was given no validators.
    #[error("empty validator list")]
    EmptyValidatorList,

    /// `OneOf` was given no literals.
    #[error("empty list of literals")]
    EmptyLiteralList,

    /// `OneOf` was given an empty literal.
    #[error("empty literal at index {index}")]
    EmptyLiteral {
        /// Position of the empty literal in the input list.
        index: usize,
    },

    /// `Cond` was given neither a `yes` nor a `no` branch.
    #[error("conditional on {field:?} has neither branch")]
    VacuousCondition {
        /// Field of the vacuous conditional.
        field: Cow<'static, str>,
    },

    /// A field validator was given an empty field name.
    #[error("empty field name")]
    EmptyFieldName,

    /// `Pattern` was given a pattern that does not compile.
    #[cfg(feature = "pattern")]
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Unwraps a construction result, panicking with the configuration error.
///
/// Used by the panicking convenience constructors.
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T, ConfigError>, ctor: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("vald::{ctor}(): {err}"),
    }
}
