//! Macros for composing validators with minimal boilerplate.

/// Builds a [`Pack`](crate::combinators::Pack) from validator expressions.
///
/// Each argument is boxed with [`ValidateExt::boxed`](crate::foundation::ValidateExt::boxed),
/// so validators of different types can be listed directly. At least one
/// validator is required; `pack![]` does not compile.
///
/// ```rust
/// use std::collections::HashMap;
/// use vald::prelude::*;
///
/// let validate = pack![
///     opt("aaa", one_of(["xxx", "yyy", "zzz"])),
///     req("bbb", pattern("^[a-z]{3}$")),
/// ];
///
/// let values = validate.map(&HashMap::from([("bbb", "yyy")])).unwrap();
/// assert_eq!(values.len(), 1);
/// ```
#[macro_export]
macro_rules! pack {
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::pack([
            $($crate::foundation::ValidateExt::boxed($validator)),+
        ])
    };
}
