//! PACK combinator - sequential composition
//!
//! [`Pack`] runs its validators one after another, in the order they were
//! given, and stops at the first failure. It does no fetching or checking
//! of its own.
//!
//! Construction order is observable: it decides which field's error is
//! reported and in which order pairs reach the sink.

use crate::foundation::error::or_panic;
use crate::foundation::{ConfigError, Error, Validate, Validator};
use crate::sink::Sink;
use crate::source::Source;

/// Runs validators in sequence, short-circuiting on the first error.
#[derive(Debug, Clone)]
pub struct Pack {
    validators: Vec<Validator>,
}

impl Pack {
    /// Creates a pack from a non-empty list of validators.
    pub fn try_new<I>(validators: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Validator>,
    {
        let validators: Vec<_> = validators.into_iter().collect();
        if validators.is_empty() {
            return Err(ConfigError::EmptyValidatorList);
        }
        Ok(Self { validators })
    }

    /// Number of validators in the pack.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Always `false`; a pack is never empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterates over the validators in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Validator> {
        self.validators.iter()
    }
}

impl Validate for Pack {
    fn validate(&self, source: &dyn Source, sink: &mut dyn Sink) -> Result<(), Error> {
        for validator in &self.validators {
            validator.validate(source, sink)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a Validator;
    type IntoIter = std::slice::Iter<'a, Validator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a pack from a non-empty list of validators.
///
/// See also the [`pack!`](crate::pack!) macro, which boxes its arguments.
///
/// # Panics
///
/// Panics if `validators` is empty.
#[track_caller]
pub fn pack<I>(validators: I) -> Pack
where
    I: IntoIterator<Item = Validator>,
{
    or_panic(Pack::try_new(validators), "pack")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{boolean, one_of};
    use crate::combinators::{opt, req};
    use crate::foundation::ValidateExt;
    use std::collections::HashMap;

    #[test]
    fn test_pack_preserves_order() {
        let v = pack([
            req("b", boolean()).boxed(),
            req("a", boolean()).boxed(),
            opt("c", boolean()).boxed(),
        ]);
        let src = HashMap::from([("a", "1"), ("b", "0"), ("c", "t")]);
        let keys: Vec<_> = v
            .collect(&src)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(v.len(), 3);
        assert_eq!((&v).into_iter().count(), 3);
    }

    #[test]
    fn test_pack_stops_at_first_failure() {
        let v = pack([
            req("a", boolean()).boxed(),
            req("b", one_of(["x"])).boxed(),
            req("c", boolean()).boxed(),
        ]);
        let src = HashMap::from([("a", "1"), ("b", "y")]);

        let mut seen: Vec<(String, String)> = Vec::new();
        let err = v.validate(&src, &mut seen).unwrap_err();
        assert_eq!(err.field(), Some("b"));
        assert_eq!(seen, vec![("a".to_owned(), "true".to_owned())]);
    }

    #[test]
    fn test_nested_pack() {
        let inner = pack([req("a", boolean()).boxed()]);
        let outer = pack([inner.boxed(), req("b", boolean()).boxed()]);
        let src = HashMap::from([("a", "1"), ("b", "1")]);
        assert_eq!(outer.map(&src).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_pack_rejected() {
        assert!(matches!(
            Pack::try_new(Vec::new()),
            Err(ConfigError::EmptyValidatorList)
        ));
    }

    #[test]
    #[should_panic(expected = "vald::pack(): empty validator list")]
    fn test_empty_pack_panics() {
        let _ = pack(Vec::new());
    }
}
