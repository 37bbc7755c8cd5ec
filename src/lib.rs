//! # seqview
//!
//! Human-readable rendering of whole sequences or bounded parts of them.
//!
//! ## What does it do?
//!
//! Given a slice, seqview renders a chosen sub-range as one string:
//! every element, the first or last one, an inclusive window, a single index,
//! or the first/last `n + 1` elements. The text around elements (prefix, join,
//! suffix) and the text of each element are both configurable.
//!
//! ## Key Features
//!
//! - **Length-agnostic ranges**: a [`ViewRange`] is built once and resolved
//!   against each sequence it is applied to
//! - **Never out of bounds**: requested indices are clamped into the sequence,
//!   out-of-range views fall back to the nearest boundary element
//! - **Pluggable mappings**: `Display`, verbatim text, `null`-aware optionals
//!   or any (fallible) closure through [`ToText`]
//! - **Diagnostics**: [`inspect()`] dumps one indexed line per element,
//!   [`TracePrinter`] renders frame traces with a shared, restylable layout
//!
//! ## Quick Start
//!
//! ```rust
//! use seqview::{to_string, to_string_range, Limit, ViewRange};
//!
//! let numbers = [5, 7, 9, 12, 15];
//!
//! assert_eq!(to_string(&numbers).unwrap(), "[5, 7, 9, 12, 15]");
//! assert_eq!(to_string_range(&numbers, &ViewRange::window(1, 2)).unwrap(), "[7, 9]");
//! assert_eq!(to_string_range(&numbers, &ViewRange::limit(1, Limit::ToLast)).unwrap(), "[12, 15]");
//! ```
//!
//! ### Absent Elements
//!
//! ```rust
//! use seqview::to_string_nullable;
//!
//! let sparse = [Some(5), Some(7), None, Some(12), None];
//! assert_eq!(to_string_nullable(&sparse).unwrap(), "[5, 7, null, 12, null]");
//! ```
//!
//! ### Custom Tokens and Mappings
//!
//! ```rust
//! use seqview::{format_view, from_fn, FormatTokens, ViewRange};
//!
//! let tokens = FormatTokens::new().with_prefix("{").with_join(" ").with_suffix("}");
//! let hex = from_fn(|b: &u8| format!("{b:02x}"));
//! let text = format_view(&[0xde_u8, 0xad, 0xbe, 0xef], &ViewRange::all(), &hex, &tokens).unwrap();
//! assert_eq!(text, "{de ad be ef}");
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (clamped bounds at `trace` level,
//! inspections and trace renders at `debug` level) and never installs a
//! subscriber itself.
//!
//! ## Layout Reference
//!
//! See the [`layout`] module for the exact text produced by each formatter.

pub mod error;
pub mod inspect;
pub mod layout;
pub mod mapping;
pub mod options;
pub mod range;
pub mod render;
pub mod trace;

pub use error::{Error, Result};
pub use inspect::{inspect, inspect_nested, inspect_nested_with, inspect_nullable, inspect_with};
pub use mapping::{
    from_fn, try_from_fn, FromFn, Identity, MappingKind, NullOr, ToText, TryFromFn, ValueOf,
};
pub use options::FormatTokens;
pub use range::{resolve, Bounds, Limit, ViewRange};
pub use render::{
    format_display, format_display_view, format_labelled, format_nullable, format_nullable_view,
    format_source, format_view, format_with, join_texts, to_text_vec, RangeFormatter,
};
pub use trace::{Frame, FrameLine, StyleHandle, TracePrinter};

use std::fmt::Display;

/// Renders every element of `seq` through `Display`, as `[a, b, c]`.
///
/// # Examples
///
/// ```rust
/// use seqview::to_string;
///
/// assert_eq!(to_string(&["x", "y"]).unwrap(), "[x, y]");
/// assert_eq!(to_string::<u8>(&[]).unwrap(), "[]");
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn to_string<T: Display>(seq: &[T]) -> Result<String> {
    to_string_with_tokens(seq, &ViewRange::all(), &FormatTokens::default())
}

/// Renders `range` of `seq` through `Display`, with the default tokens.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn to_string_range<T: Display>(seq: &[T], range: &ViewRange) -> Result<String> {
    to_string_with_tokens(seq, range, &FormatTokens::default())
}

/// Renders `range` of `seq` through `Display`, with custom tokens.
///
/// # Examples
///
/// ```rust
/// use seqview::{to_string_with_tokens, FormatTokens, ViewRange};
///
/// let tokens = FormatTokens::joined(" -> ");
/// let path = ["home", "user", "docs"];
/// assert_eq!(
///     to_string_with_tokens(&path, &ViewRange::all(), &tokens).unwrap(),
///     "[home -> user -> docs]"
/// );
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn to_string_with_tokens<T: Display>(
    seq: &[T],
    range: &ViewRange,
    tokens: &FormatTokens,
) -> Result<String> {
    format_display_view(seq, range, tokens)
}

/// Renders every element of a sequence with absent elements, printing `null`
/// for each `None`.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn to_string_nullable<T: Display>(seq: &[Option<T>]) -> Result<String> {
    format_nullable_view(seq, &ViewRange::all(), &FormatTokens::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&[5, 7, 9, 12, 15]).unwrap(), "[5, 7, 9, 12, 15]");
    }

    #[test]
    fn test_to_string_range() {
        let numbers = [1, 2, 3, 4];
        assert_eq!(to_string_range(&numbers, &ViewRange::first()).unwrap(), "[1]");
        assert_eq!(to_string_range(&numbers, &ViewRange::single(9)).unwrap(), "[4]");
    }

    #[test]
    fn test_to_string_nullable() {
        let values: [Option<&str>; 3] = [Some("a"), None, Some("c")];
        assert_eq!(to_string_nullable(&values).unwrap(), "[a, null, c]");
    }

    #[test]
    fn test_empty_is_always_brackets() {
        let empty: [i32; 0] = [];
        let tokens = FormatTokens::labelled("xs");
        assert_eq!(to_string_with_tokens(&empty, &ViewRange::all(), &tokens).unwrap(), "[]");
    }
}
