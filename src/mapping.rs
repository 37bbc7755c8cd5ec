//! Element-to-text mappings.
//!
//! Every formatter renders elements through a [`ToText`] implementation:
//!
//! - [`ValueOf`]: the element's own [`Display`](std::fmt::Display) form
//! - [`Identity`]: the element already *is* text and is copied verbatim
//! - [`NullOr`]: `Display` for `Some`, the literal `null` for `None`
//! - [`from_fn`] / [`try_from_fn`]: caller-supplied closures
//!
//! Built-in mappings report what they are through [`ToText::kind`], so callers
//! can take fast paths without comparing against shared instances. The
//! formatters in this crate never branch on it; it is a query for callers.
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{from_fn, Identity, MappingKind, ToText, ValueOf};
//!
//! assert_eq!(ValueOf.to_text(&42).unwrap(), "42");
//! assert!(ToText::<str>::is_identity(&Identity));
//!
//! let hex = from_fn(|n: &u32| format!("{n:#x}"));
//! assert_eq!(hex.to_text(&255).unwrap(), "0xff");
//! assert_eq!(ToText::<u32>::kind(&hex), MappingKind::Custom);
//! ```

use crate::options::NULL;
use crate::{Error, Result};
use std::fmt::{self, Write as _};

/// Classification of a mapping, used for fast-path decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappingKind {
    /// Renders through the element's `Display` form.
    ValueOf,
    /// Copies textual elements verbatim.
    Identity,
    /// Anything supplied by the caller.
    Custom,
}

/// Converts one element into text.
///
/// Implementations should render every element, absent ones included. A
/// returned error aborts the whole render and reaches the caller as is.
pub trait ToText<T: ?Sized> {
    fn to_text(&self, value: &T) -> Result<String>;

    /// Appends the text of `value` to `out`.
    ///
    /// The default implementation allocates through [`ToText::to_text`];
    /// built-in mappings write in place.
    fn write_text(&self, value: &T, out: &mut String) -> Result<()> {
        out.push_str(&self.to_text(value)?);
        Ok(())
    }

    fn kind(&self) -> MappingKind {
        MappingKind::Custom
    }

    fn is_identity(&self) -> bool {
        self.kind() == MappingKind::Identity
    }

    fn is_value_of(&self) -> bool {
        self.kind() == MappingKind::ValueOf
    }
}

impl<T: ?Sized, M: ToText<T> + ?Sized> ToText<T> for &M {
    fn to_text(&self, value: &T) -> Result<String> {
        (**self).to_text(value)
    }

    fn write_text(&self, value: &T, out: &mut String) -> Result<()> {
        (**self).write_text(value, out)
    }

    fn kind(&self) -> MappingKind {
        (**self).kind()
    }
}

/// Renders elements through their `Display` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueOf;

impl<T: fmt::Display + ?Sized> ToText<T> for ValueOf {
    fn to_text(&self, value: &T) -> Result<String> {
        let mut out = String::new();
        self.write_text(value, &mut out)?;
        Ok(out)
    }

    fn write_text(&self, value: &T, out: &mut String) -> Result<()> {
        write!(out, "{value}").map_err(|_| Error::custom("Display implementation returned an error"))
    }

    fn kind(&self) -> MappingKind {
        MappingKind::ValueOf
    }
}

/// Copies string-like elements verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: AsRef<str> + ?Sized> ToText<T> for Identity {
    fn to_text(&self, value: &T) -> Result<String> {
        Ok(value.as_ref().to_string())
    }

    fn write_text(&self, value: &T, out: &mut String) -> Result<()> {
        out.push_str(value.as_ref());
        Ok(())
    }

    fn kind(&self) -> MappingKind {
        MappingKind::Identity
    }
}

/// Renders `Some(v)` through `Display` and `None` as `null`.
///
/// This is the only place where absent elements get special text.
///
/// ```rust
/// use seqview::{NullOr, ToText};
///
/// assert_eq!(NullOr.to_text(&Some(7)).unwrap(), "7");
/// assert_eq!(NullOr.to_text(&None::<i32>).unwrap(), "null");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullOr;

impl<T: fmt::Display> ToText<Option<T>> for NullOr {
    fn to_text(&self, value: &Option<T>) -> Result<String> {
        let mut out = String::new();
        self.write_text(value, &mut out)?;
        Ok(out)
    }

    fn write_text(&self, value: &Option<T>, out: &mut String) -> Result<()> {
        match value {
            Some(v) => ValueOf.write_text(v, out),
            None => {
                out.push_str(NULL);
                Ok(())
            }
        }
    }

    fn kind(&self) -> MappingKind {
        MappingKind::ValueOf
    }
}

/// A mapping backed by an infallible closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}

impl<T: ?Sized, F: Fn(&T) -> String> ToText<T> for FromFn<F> {
    fn to_text(&self, value: &T) -> Result<String> {
        Ok((self.0)(value))
    }
}

/// Wraps a closure as a [`ToText`] mapping.
pub fn from_fn<T: ?Sized, F: Fn(&T) -> String>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// A mapping backed by a fallible closure. Created by [`try_from_fn`].
#[derive(Clone, Copy)]
pub struct TryFromFn<F>(F);

impl<F> fmt::Debug for TryFromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TryFromFn(..)")
    }
}

impl<T: ?Sized, F: Fn(&T) -> Result<String>> ToText<T> for TryFromFn<F> {
    fn to_text(&self, value: &T) -> Result<String> {
        (self.0)(value)
    }
}

/// Wraps a fallible closure as a [`ToText`] mapping.
///
/// # Examples
///
/// ```rust
/// use seqview::{try_from_fn, Error, ToText};
///
/// let positive = try_from_fn(|n: &i32| {
///     if *n > 0 { Ok(n.to_string()) } else { Err(Error::custom("not positive")) }
/// });
/// assert!(positive.to_text(&-1).is_err());
/// ```
pub fn try_from_fn<T: ?Sized, F: Fn(&T) -> Result<String>>(f: F) -> TryFromFn<F> {
    TryFromFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ToText::<i32>::kind(&ValueOf), MappingKind::ValueOf);
        assert_eq!(ToText::<String>::kind(&Identity), MappingKind::Identity);
        assert_eq!(ToText::<Option<u8>>::kind(&NullOr), MappingKind::ValueOf);
        assert_eq!(
            ToText::<i32>::kind(&from_fn(|v: &i32| v.to_string())),
            MappingKind::Custom
        );
        assert!(ToText::<i32>::is_value_of(&ValueOf));
        assert!(!ToText::<i32>::is_identity(&ValueOf));
    }

    #[test]
    fn test_kind_through_reference() {
        let mapping = &Identity;
        assert!(ToText::<str>::is_identity(&mapping));
    }

    #[test]
    fn test_identity_writes_in_place() {
        let mut out = String::from("> ");
        Identity.write_text("abc", &mut out).unwrap();
        assert_eq!(out, "> abc");
    }

    #[test]
    fn test_null_or() {
        assert_eq!(NullOr.to_text(&Some("x")).unwrap(), "x");
        assert_eq!(NullOr.to_text(&None::<String>).unwrap(), "null");
    }

    #[test]
    fn test_failing_display_is_an_error() {
        assert!(ValueOf.to_text(&Broken).is_err());
    }

    #[test]
    fn test_try_from_fn_propagates_error_unchanged() {
        let mapping = try_from_fn(|_: &i32| Err(Error::mapping(0, "nope")));
        assert_eq!(mapping.to_text(&1), Err(Error::mapping(0, "nope")));
    }
}
