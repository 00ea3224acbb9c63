//! Value sources
//!
//! A [`Source`] answers "what is the current value of this field?". Absence
//! is `None`, and an empty string counts as absent too, so sources that
//! cannot tell the two apart (HTML forms, mostly) behave the same as those
//! that can.
//!
//! Adapters provided here:
//!
//! - any `HashMap` / `BTreeMap` keyed by something that borrows as `str`
//! - [`from_fn`] for closures
//! - [`EnvSource`] for the process environment
//! - [`FormSource`] for `application/x-www-form-urlencoded` text (feature `form`)

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Capability to look up a field's current value.
pub trait Source {
    /// Returns the value of `name`, or `None` if it is absent.
    fn get(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<S: Source + ?Sized> Source for &S {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).get(name)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).get(name)
    }
}

impl<K, V, H> Source for HashMap<K, V, H>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    H: BuildHasher,
{
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        Self::get(self, name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Source for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        Self::get(self, name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// Returns the value of `name` from `source`, treating empty values as absent.
pub(crate) fn fetch<'s>(source: &'s dyn Source, name: &str) -> Option<Cow<'s, str>> {
    source.get(name).filter(|value| !value.is_empty())
}

// ============================================================================
// CLOSURE SOURCE
// ============================================================================

/// A source backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSource<F> {
    lookup: F,
}

impl<F> Source for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        (self.lookup)(name).map(Cow::Owned)
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource")
            .field("lookup", &"<function>")
            .finish()
    }
}

/// Creates a source from a lookup closure.
///
/// ```rust
/// use vald::source::{self, Source};
///
/// let src = source::from_fn(|name| (name == "id").then(|| "42".to_owned()));
/// assert_eq!(src.get("id").as_deref(), Some("42"));
/// assert_eq!(src.get("other"), None);
/// ```
pub fn from_fn<F>(lookup: F) -> FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnSource { lookup }
}

// ============================================================================
// ENVIRONMENT SOURCE
// ============================================================================

/// Reads fields from the process environment.
///
/// An optional prefix is prepended to every field name, so `port` can be
/// read from `APP_PORT`. Variables that are not valid UTF-8 are treated as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Reads variables by their exact field name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads variables named `prefix` + field name.
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Source for EnvSource {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = if self.prefix.is_empty() {
            std::env::var(name)
        } else {
            std::env::var(format!("{}{name}", self.prefix))
        };
        value.ok().map(Cow::Owned)
    }
}

// ============================================================================
// FORM SOURCE
// ============================================================================

/// Fields decoded from `application/x-www-form-urlencoded` text, such as a
/// POST body or a URL query string.
///
/// When a key repeats, the first value wins.
///
/// ```rust
/// use vald::source::{FormSource, Source};
///
/// let form = FormSource::parse("name=J%C3%BCrgen&tag=a&tag=b&empty=");
/// assert_eq!(form.get("name").as_deref(), Some("Jürgen"));
/// assert_eq!(form.get("tag").as_deref(), Some("a"));
/// assert_eq!(form.get("empty").as_deref(), Some(""));
/// ```
#[cfg(feature = "form")]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSource {
    values: HashMap<String, String>,
}

#[cfg(feature = "form")]
impl FormSource {
    /// Decodes url-encoded `input`. A leading `?` is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        url::form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(feature = "form")]
impl FromIterator<(String, String)> for FormSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut values = HashMap::new();
        for (key, value) in iter {
            values.entry(key).or_insert(value);
        }
        Self { values }
    }
}

#[cfg(feature = "form")]
impl Source for FormSource {
    fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.values.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}
