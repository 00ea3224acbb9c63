//! Field validators and their composition
//!
//! - [`Req`], [`Opt`], [`OptDef`] bind a field name to a checker
//! - [`Cond`] branches on whether a field is present
//! - [`Pack`] chains validators in order
//!
//! Every type comes with a panicking factory function (`req`, `opt`, …) for
//! validators built once at startup, and a `try_new` constructor returning
//! [`ConfigError`](crate::foundation::ConfigError) for validators built
//! from runtime data.

pub mod cond;
pub mod field;
pub mod pack;

pub use cond::{Cond, cond};
pub use field::{Opt, OptDef, Req, opt, opt_def, req};
pub use pack::{Pack, pack};
