//! Prelude module for convenient imports.
//!
//! ```rust
//! use vald::prelude::*;
//!
//! let validate = pack![
//!     req("email", pattern("^[^@]+@[^@]+$")),
//!     opt_def("lang", one_of(["en", "de"]), "en"),
//! ];
//! # let _ = validate;
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxError, CheckError, Checker, ConfigError, Error, Validate, ValidateExt, Validator, Values,
};

// ============================================================================
// SOURCES AND SINKS
// ============================================================================

#[cfg(feature = "form")]
pub use crate::source::FormSource;
pub use crate::sink::Sink;
pub use crate::source::{EnvSource, Source};

// ============================================================================
// CHECKERS
// ============================================================================

#[cfg(feature = "pattern")]
pub use crate::checkers::{Pattern, pattern};
pub use crate::checkers::{Bool, OneOf, boolean, one_of};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Cond, Opt, OptDef, Pack, Req, cond, opt, opt_def, pack, req};

pub use crate::pack;
