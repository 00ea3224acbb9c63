//! Output sinks
//!
//! A [`Sink`] receives every accepted `(field, value)` pair, once per field
//! and in evaluation order. It may refuse a pair; the refusal aborts the
//! run and is reported unchanged as [`Error::Sink`](crate::foundation::Error::Sink).

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use crate::foundation::BoxError;

/// Capability to accept validated pairs.
pub trait Sink {
    /// Accepts one validated pair.
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError> {
        (**self).consume(name, value)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError> {
        (**self).consume(name, value)
    }
}

/// Inserts every pair; a repeated field overwrites the earlier value.
impl<H: BuildHasher> Sink for HashMap<String, String, H> {
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError> {
        self.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Records pairs in emission order.
impl Sink for Vec<(String, String)> {
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError> {
        self.push((name.to_owned(), value.to_owned()));
        Ok(())
    }
}

// ============================================================================
// CLOSURE SINK
// ============================================================================

/// A sink backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSink<F> {
    consume: F,
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str, &str) -> Result<(), BoxError>,
{
    fn consume(&mut self, name: &str, value: &str) -> Result<(), BoxError> {
        (self.consume)(name, value)
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink")
            .field("consume", &"<function>")
            .finish()
    }
}

/// Creates a sink from a closure.
///
/// ```rust
/// use std::collections::HashMap;
/// use vald::prelude::*;
/// use vald::sink;
///
/// let validate = req("id", pattern("^[0-9]+$"));
/// let source = HashMap::from([("id", "7")]);
///
/// let mut seen = Vec::new();
/// validate
///     .validate(&source, &mut sink::from_fn(|k, v| {
///         seen.push(format!("{k}={v}"));
///         Ok(())
///     }))
///     .unwrap();
/// assert_eq!(seen, ["id=7"]);
/// ```
pub fn from_fn<F>(consume: F) -> FnSink<F>
where
    F: FnMut(&str, &str) -> Result<(), BoxError>,
{
    FnSink { consume }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_sink_last_write_wins() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.consume("a", "1").unwrap();
        map.consume("a", "2").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], "2");
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut pairs: Vec<(String, String)> = Vec::new();
        pairs.consume("b", "1").unwrap();
        pairs.consume("a", "2").unwrap();
        assert_eq!(
            pairs,
            vec![("b".to_owned(), "1".to_owned()), ("a".to_owned(), "2".to_owned())]
        );
    }

    #[test]
    fn test_fn_sink_propagates_refusal() {
        let mut sink = from_fn(|k, _| {
            if k == "bad" {
                Err(format!("refused {k:?}").into())
            } else {
                Ok(())
            }
        });
        assert!(sink.consume("good", "x").is_ok());
        assert_eq!(
            sink.consume("bad", "x").unwrap_err().to_string(),
            "refused \"bad\""
        );
    }
}
