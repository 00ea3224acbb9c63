//! COND combinator - branch on the presence of a field
//!
//! [`Cond`] checks one field like [`Req`](super::Req) would, then decides
//! what to validate next:
//!
//! - field present and accepted: run the `yes` branch
//! - field absent: run the `no` branch
//!
//! A missing branch means "nothing more to do". At least one branch must be
//! given, otherwise the conditional is a plain [`Opt`](super::Opt) in
//! disguise and is rejected at construction.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use vald::prelude::*;
//!
//! // Either a card number (with a CVC), or an invoice address.
//! let payment = cond(
//!     "card",
//!     pattern("^[0-9]{16}$"),
//!     Some(req("cvc", pattern("^[0-9]{3}$")).boxed()),
//!     Some(req("invoice_to", pattern(".+@.+")).boxed()),
//! );
//!
//! let by_card = HashMap::from([("card", "4111111111111111"), ("cvc", "123")]);
//! assert_eq!(payment.collect(&by_card).unwrap().len(), 2);
//!
//! let by_invoice = HashMap::from([("invoice_to", "ap@example.com")]);
//! assert_eq!(payment.map(&by_invoice).unwrap()["invoice_to"], "ap@example.com");
//! ```

use std::borrow::Cow;

use crate::combinators::field::{accept, field_name};
use crate::foundation::error::or_panic;
use crate::foundation::{Checker, ConfigError, Error, Validate, Validator};
use crate::sink::Sink;
use crate::source::{Source, fetch};

/// Branches on the presence of a field. See the [module docs](self).
#[derive(Debug, Clone)]
pub struct Cond<C> {
    field: Cow<'static, str>,
    checker: C,
    yes: Option<Validator>,
    no: Option<Validator>,
}

impl<C> Cond<C> {
    /// Creates a conditional validator.
    ///
    /// Fails with [`ConfigError::VacuousCondition`] if both branches are `None`.
    pub fn try_new(
        field: impl Into<Cow<'static, str>>,
        checker: C,
        yes: Option<Validator>,
        no: Option<Validator>,
    ) -> Result<Self, ConfigError> {
        let field = field_name(field)?;
        if yes.is_none() && no.is_none() {
            return Err(ConfigError::VacuousCondition { field });
        }

        Ok(Self {
            field,
            checker,
            yes,
            no,
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

    /// Returns the branch taken when the field is present.
    pub fn yes(&self) -> Option<&Validator> {
        self.yes.as_ref()
    }

    /// Returns the branch taken when the field is absent.
    pub fn no(&self) -> Option<&Validator> {
        self.no.as_ref()
    }
}

impl<C: Checker> Validate for Cond<C> {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        if let Some(raw) = fetch(source, &self.field) {
            accept(&self.field, &raw, &self.checker, sink)?;
            if let Some(yes) = &self.yes {
                tracing::trace!(field = %self.field, branch = "yes", "conditional branch");
                return yes.validate(source, sink);
            }
        } else if let Some(no) = &self.no {
            tracing::trace!(field = %self.field, branch = "no", "conditional branch");
            return no.validate(source, sink);
        }

        Ok(())
    }
}

/// Creates a conditional validator.
///
/// # Panics
///
/// Panics if both branches are `None` or `field` is empty.
#[track_caller]
pub fn cond<C: Checker>(
    field: impl Into<Cow<'static, str>>,
    checker: C,
    yes: Option<Validator>,
    no: Option<Validator>,
) -> Cond<C> {
    or_panic(Cond::try_new(field, checker, yes, no), "cond")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::boolean;
    use crate::combinators::req;
    use crate::foundation::ValidateExt;
    use std::collections::HashMap;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn both() -> Cond<crate::checkers::Bool> {
        cond(
            "aaa",
            boolean(),
            Some(req("bbb", boolean()).boxed()),
            Some(req("ccc", boolean()).boxed()),
        )
    }

    #[test]
    fn test_present_runs_yes_after_field() {
        let src = HashMap::from([("aaa", "1"), ("bbb", "0")]);
        assert_eq!(
            both().collect(&src).unwrap(),
            pairs(&[("aaa", "true"), ("bbb", "false")])
        );
    }

    #[test]
    fn test_absent_runs_no() {
        let src = HashMap::from([("ccc", "0")]);
        assert_eq!(both().collect(&src).unwrap(), pairs(&[("ccc", "false")]));
    }

    #[test]
    fn test_rejected_field_skips_yes() {
        let src = HashMap::from([("aaa", "maybe")]);
        let err = both().collect(&src).unwrap_err();
        assert_eq!(err.field(), Some("aaa"));
        assert!(err.is_invalid());
    }

    #[test]
    fn test_branch_error_propagates() {
        let src = HashMap::from([("aaa", "1")]);
        let err = both().collect(&src).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.field(), Some("bbb"));
    }

    #[test]
    fn test_missing_branches_do_nothing() {
        let only_yes = cond("aaa", boolean(), Some(req("bbb", boolean()).boxed()), None);
        let src: HashMap<&str, &str> = HashMap::new();
        assert!(only_yes.collect(&src).unwrap().is_empty());
        assert!(only_yes.no().is_none());

        let only_no = cond("aaa", boolean(), None, Some(req("ccc", boolean()).boxed()));
        let src = HashMap::from([("aaa", "yes"), ("ccc", "1")]);
        assert!(only_no.collect(&src).unwrap_err().is_invalid());
        let src = HashMap::from([("aaa", "T")]);
        assert_eq!(only_no.collect(&src).unwrap(), pairs(&[("aaa", "true")]));
        assert!(only_no.yes().is_none());
    }

    #[test]
    fn test_vacuous_condition_rejected() {
        let err = Cond::try_new("aaa", boolean(), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::VacuousCondition { ref field } if field == "aaa"));
    }

    #[test]
    #[should_panic(expected = "has neither branch")]
    fn test_vacuous_condition_panics() {
        let _ = cond("aaa", boolean(), None, None);
    }
}
