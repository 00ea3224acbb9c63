//! # vald
//!
//! Declarative validation for flat sets of named string inputs: HTML form
//! fields, query parameters, environment variables.
//!
//! A validator is built once, usually at startup, from small pieces:
//!
//! - a [`Checker`](foundation::Checker) normalizes or rejects one raw value
//! - [`req`](combinators::req), [`opt`](combinators::opt),
//!   [`opt_def`](combinators::opt_def) and [`cond`](combinators::cond) bind
//!   a field name to a checker
//! - [`pack!`] chains them in order
//!
//! It is then run against any number of [`Source`](source::Source)s,
//! producing either every validated pair or the first error.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use vald::prelude::*;
//!
//! let validate = pack![
//!     opt("aaa", one_of(["xxx", "yyy", "zzz"])),
//!     req("bbb", pattern("^[a-z]{3}$")),
//!     req("ccc", one_of(["xxx", "yyy"])),
//!     opt_def("AAA", pattern("^[A-Z]{3}$"), "XXX"),
//!     req("isOK", boolean()),
//! ];
//!
//! let source = HashMap::from([("aaa", "zzz"), ("bbb", "yyy"), ("ccc", "xxx"), ("isOK", "1")]);
//! let values = validate.map(&source).unwrap();
//!
//! assert_eq!(values["AAA"], "XXX");
//! assert_eq!(values["isOK"], "true");
//! ```
//!
//! ## Errors
//!
//! Evaluation stops at the first failing field and reports it as an
//! [`Error`](foundation::Error). Misconfigured validators (an empty `pack`,
//! an empty literal list, a conditional without branches, an invalid
//! regular expression) are caught when they are built: the factory
//! functions panic, the `try_new` constructors return a
//! [`ConfigError`](foundation::ConfigError).
//!
//! ## Features
//!
//! - `pattern` (default) — the regex-backed [`Pattern`](checkers::Pattern) checker
//! - `form` (default) — [`FormSource`](source::FormSource) for url-encoded input

#[macro_use]
mod macros;

pub mod checkers;
pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod sink;
pub mod source;
