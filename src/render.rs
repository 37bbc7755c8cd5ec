//! Bounded rendering of sequence ranges.
//!
//! This module holds the routine every other formatter in the crate is built
//! on, [`format_with`]:
//!
//! ```text
//! prefix + map(seq[start]) + join + map(seq[start + 1]) + ... + suffix
//! ```
//!
//! - an empty sequence renders as `[]`, whatever the tokens and mapping
//! - the `start`/`end` indices are clamped again before use, so no call ever
//!   indexes outside the sequence (see [`Bounds::clamp`])
//! - a failing mapping aborts the render and its error is returned unchanged
//!
//! The other functions fix some of the inputs and delegate.
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{format_nullable_view, format_view, FormatTokens, ValueOf, ViewRange};
//!
//! let numbers = [5, 7, 9, 12, 15];
//! let text = format_view(&numbers, &ViewRange::all(), &ValueOf, &FormatTokens::default()).unwrap();
//! assert_eq!(text, "[5, 7, 9, 12, 15]");
//!
//! let sparse = [Some(5), Some(7), None, Some(12), None];
//! let text = format_nullable_view(&sparse, &ViewRange::all(), &FormatTokens::default()).unwrap();
//! assert_eq!(text, "[5, 7, null, 12, null]");
//! ```

use crate::mapping::{Identity, NullOr, ToText, ValueOf};
use crate::options::EMPTY;
use crate::range::{Bounds, ViewRange};
use crate::{Error, FormatTokens, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renders `seq[start..end]` with `mapping`, wrapped in `tokens`.
///
/// `end` is exclusive. Both indices are clamped into the sequence; the element
/// at the clamped `start` is always rendered.
///
/// # Examples
///
/// ```rust
/// use seqview::{format_with, from_fn, FormatTokens};
///
/// let words = ["alpha", "beta", "gamma", "delta"];
/// let upper = from_fn(|w: &&str| w.to_uppercase());
/// let text = format_with(&words, 1, 3, &upper, &FormatTokens::joined("/")).unwrap();
/// assert_eq!(text, "[BETA/GAMMA]");
/// ```
///
/// # Errors
///
/// Returns the first error produced by `mapping`.
pub fn format_with<T, M>(
    seq: &[T],
    start: isize,
    end: isize,
    mapping: &M,
    tokens: &FormatTokens,
) -> Result<String>
where
    M: ToText<T> + ?Sized,
{
    match Bounds::clamp(start, end, seq.len()) {
        Some(bounds) => write_bounded(seq, bounds, mapping, tokens),
        None => Ok(EMPTY.to_string()),
    }
}

fn write_bounded<T, M>(
    seq: &[T],
    bounds: Bounds,
    mapping: &M,
    tokens: &FormatTokens,
) -> Result<String>
where
    M: ToText<T> + ?Sized,
{
    let Some(window) = seq.get(bounds.as_range()) else {
        return Ok(EMPTY.to_string());
    };

    tracing::trace!(
        len = seq.len(),
        start = bounds.start,
        end = bounds.end,
        "rendering bounded range"
    );

    // Rough guess: a few bytes per element on top of the fixed tokens
    let mut output = String::with_capacity(tokens.overhead(window.len()) + window.len() * 4);
    output.push_str(&tokens.prefix);
    for (i, element) in window.iter().enumerate() {
        if i > 0 {
            output.push_str(&tokens.join);
        }
        mapping.write_text(element, &mut output)?;
    }
    output.push_str(&tokens.suffix);
    Ok(output)
}

/// Resolves `range` against `seq` and renders it.
///
/// # Errors
///
/// Returns the first error produced by `mapping`.
pub fn format_view<T, M>(
    seq: &[T],
    range: &ViewRange,
    mapping: &M,
    tokens: &FormatTokens,
) -> Result<String>
where
    M: ToText<T> + ?Sized,
{
    match range.resolve(seq.len()) {
        Some(bounds) => write_bounded(seq, bounds, mapping, tokens),
        None => Ok(EMPTY.to_string()),
    }
}

/// Renders an optional source, failing fast when it is absent.
///
/// # Errors
///
/// Returns [`Error::AbsentSequence`] for `None`, otherwise the first error
/// produced by `mapping`.
pub fn format_source<T, M>(
    source: Option<&[T]>,
    range: &ViewRange,
    mapping: &M,
    tokens: &FormatTokens,
) -> Result<String>
where
    M: ToText<T> + ?Sized,
{
    let seq = source.ok_or_else(Error::absent_sequence)?;
    format_view(seq, range, mapping, tokens)
}

/// Renders `seq[start..end]` through `Display`.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn format_display<T: fmt::Display>(
    seq: &[T],
    start: isize,
    end: isize,
    tokens: &FormatTokens,
) -> Result<String> {
    format_with(seq, start, end, &ValueOf, tokens)
}

/// Resolves `range` and renders it through `Display`.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn format_display_view<T: fmt::Display>(
    seq: &[T],
    range: &ViewRange,
    tokens: &FormatTokens,
) -> Result<String> {
    format_view(seq, range, &ValueOf, tokens)
}

/// Renders `seq[start..end]` of a sequence with absent elements, printing
/// `null` for each `None`.
///
/// # Examples
///
/// ```rust
/// use seqview::{format_nullable, FormatTokens};
///
/// let values = [None, Some(1.5), None];
/// assert_eq!(format_nullable(&values, 0, 2, &FormatTokens::default()).unwrap(), "[null, 1.5]");
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn format_nullable<T: fmt::Display>(
    seq: &[Option<T>],
    start: isize,
    end: isize,
    tokens: &FormatTokens,
) -> Result<String> {
    format_with(seq, start, end, &NullOr, tokens)
}

/// Resolves `range` and renders it, printing `null` for each `None`.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn format_nullable_view<T: fmt::Display>(
    seq: &[Option<T>],
    range: &ViewRange,
    tokens: &FormatTokens,
) -> Result<String> {
    format_view(seq, range, &NullOr, tokens)
}

/// Joins every text in `texts` with `join`, inside the default brackets.
///
/// # Examples
///
/// ```rust
/// use seqview::join_texts;
///
/// assert_eq!(join_texts(&["a", "b", "c"], "-").unwrap(), "[a-b-c]");
/// assert_eq!(join_texts::<&str>(&[], "-").unwrap(), "[]");
/// ```
///
/// # Errors
///
/// Never fails in practice; the identity mapping cannot error.
pub fn join_texts<S: AsRef<str>>(texts: &[S], join: &str) -> Result<String> {
    format_view(texts, &ViewRange::all(), &Identity, &FormatTokens::joined(join))
}

/// Renders `range` of `seq` as `label=[a<join>b]`.
///
/// # Examples
///
/// ```rust
/// use seqview::{format_labelled, ViewRange};
///
/// let ids = [10, 20, 30];
/// let text = format_labelled("ids", &ids, &ViewRange::window(1, 2), ", ").unwrap();
/// assert_eq!(text, "ids=[20, 30]");
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn format_labelled<T: fmt::Display>(
    label: &str,
    seq: &[T],
    range: &ViewRange,
    join: &str,
) -> Result<String> {
    let tokens = FormatTokens::labelled(label).with_join(join);
    format_view(seq, range, &ValueOf, &tokens)
}

/// Maps every element of `seq` to its own string.
///
/// An empty sequence yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use seqview::{to_text_vec, ValueOf};
///
/// assert_eq!(to_text_vec(&[1, 2], &ValueOf).unwrap(), vec!["1", "2"]);
/// ```
///
/// # Errors
///
/// Returns the first error produced by `mapping`.
pub fn to_text_vec<T, M>(seq: &[T], mapping: &M) -> Result<Vec<String>>
where
    M: ToText<T> + ?Sized,
{
    seq.iter().map(|element| mapping.to_text(element)).collect()
}

/// A reusable pairing of a [`ViewRange`] with [`FormatTokens`].
///
/// # Examples
///
/// ```rust
/// use seqview::{FormatTokens, Limit, RangeFormatter, ViewRange};
///
/// let tail = RangeFormatter::new()
///     .with_range(ViewRange::limit(1, Limit::ToLast))
///     .with_tokens(FormatTokens::new().with_prefix("...["));
///
/// assert_eq!(tail.format(&[1, 2, 3, 4]).unwrap(), "...[3, 4]");
/// assert_eq!(tail.format(&["x"]).unwrap(), "...[x]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeFormatter {
    pub range: ViewRange,
    pub tokens: FormatTokens,
}

impl RangeFormatter {
    /// Renders every element with the default tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_range(mut self, range: ViewRange) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_tokens(mut self, tokens: FormatTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Renders `seq` through `Display`.
    ///
    /// # Errors
    ///
    /// Fails only if an element's `Display` implementation fails.
    pub fn format<T: fmt::Display>(&self, seq: &[T]) -> Result<String> {
        format_view(seq, &self.range, &ValueOf, &self.tokens)
    }

    /// Renders `seq` through `mapping`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `mapping`.
    pub fn format_with<T, M>(&self, seq: &[T], mapping: &M) -> Result<String>
    where
        M: ToText<T> + ?Sized,
    {
        format_view(seq, &self.range, mapping, &self.tokens)
    }

    /// Renders `seq`, printing `null` for each `None`.
    ///
    /// # Errors
    ///
    /// Fails only if an element's `Display` implementation fails.
    pub fn format_nullable<T: fmt::Display>(&self, seq: &[Option<T>]) -> Result<String> {
        format_view(seq, &self.range, &NullOr, &self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{from_fn, try_from_fn};
    use crate::range::Limit;
    use std::cell::Cell;

    const NUMBERS: [i32; 5] = [5, 7, 9, 12, 15];

    fn brackets() -> FormatTokens {
        FormatTokens::default()
    }

    #[test]
    fn test_full_range() {
        let text = format_display(&NUMBERS, 0, 5, &brackets()).unwrap();
        assert_eq!(text, "[5, 7, 9, 12, 15]");
    }

    #[test]
    fn test_empty_sequence_ignores_tokens_and_mapping() {
        let empty: [i32; 0] = [];
        let tokens = FormatTokens::provenance();
        let failing = try_from_fn(|_: &i32| Err(Error::custom("never called")));
        assert_eq!(format_with(&empty, 0, 10, &failing, &tokens).unwrap(), "[]");
        assert_eq!(
            format_view(&empty, &ViewRange::last(), &ValueOf, &tokens).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_indices_are_clamped() {
        assert_eq!(format_display(&NUMBERS, -10, 2, &brackets()).unwrap(), "[5, 7]");
        assert_eq!(format_display(&NUMBERS, 3, 99, &brackets()).unwrap(), "[12, 15]");
        assert_eq!(format_display(&NUMBERS, 40, 50, &brackets()).unwrap(), "[15]");
        assert_eq!(format_display(&NUMBERS, 2, 0, &brackets()).unwrap(), "[9]");
    }

    #[test]
    fn test_views() {
        let render = |range: ViewRange| format_display_view(&NUMBERS, &range, &brackets()).unwrap();
        assert_eq!(render(ViewRange::first()), "[5]");
        assert_eq!(render(ViewRange::last()), "[15]");
        assert_eq!(render(ViewRange::window(1, 3)), "[7, 9, 12]");
        assert_eq!(render(ViewRange::single(2)), "[9]");
        assert_eq!(render(ViewRange::limit(1, Limit::ToFirst)), "[5, 7]");
        assert_eq!(render(ViewRange::limit(1, Limit::ToLast)), "[12, 15]");
    }

    #[test]
    fn test_null_substitution() {
        let sparse = [Some(5), Some(7), None, Some(12), None];
        assert_eq!(
            format_nullable(&sparse, 0, 5, &brackets()).unwrap(),
            "[5, 7, null, 12, null]"
        );
        assert_eq!(
            format_nullable_view(&sparse, &ViewRange::single(4), &brackets()).unwrap(),
            "[null]"
        );
    }

    #[test]
    fn test_custom_tokens() {
        let tokens = FormatTokens::new()
            .with_prefix("<<")
            .with_join("|")
            .with_suffix(">>");
        assert_eq!(format_display(&NUMBERS, 0, 3, &tokens).unwrap(), "<<5|7|9>>");
    }

    #[test]
    fn test_custom_mapping() {
        let doubled = from_fn(|n: &i32| (n * 2).to_string());
        let text = format_view(&NUMBERS, &ViewRange::window(0, 1), &doubled, &brackets()).unwrap();
        assert_eq!(text, "[10, 14]");
    }

    #[test]
    fn test_mapping_error_stops_rendering() {
        let calls = Cell::new(0);
        let mapping = try_from_fn(|n: &i32| {
            calls.set(calls.get() + 1);
            if *n == 9 {
                Err(Error::mapping(2, "nine"))
            } else {
                Ok(n.to_string())
            }
        });
        let result = format_view(&NUMBERS, &ViewRange::all(), &mapping, &brackets());
        assert_eq!(result, Err(Error::mapping(2, "nine")));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_absent_source() {
        let result = format_source::<i32, _>(None, &ViewRange::all(), &ValueOf, &brackets());
        assert_eq!(result, Err(Error::AbsentSequence));

        let present = format_source(Some(&NUMBERS[..2]), &ViewRange::all(), &ValueOf, &brackets());
        assert_eq!(present.unwrap(), "[5, 7]");
    }

    #[test]
    fn test_join_texts() {
        let owned = vec!["x".to_string(), "y".to_string()];
        assert_eq!(join_texts(&owned, " + ").unwrap(), "[x + y]");
    }

    #[test]
    fn test_labelled() {
        let text = format_labelled("n", &NUMBERS, &ViewRange::first(), ", ").unwrap();
        assert_eq!(text, "n=[5]");
    }

    #[test]
    fn test_to_text_vec() {
        let empty: [u8; 0] = [];
        assert!(to_text_vec(&empty, &ValueOf).unwrap().is_empty());
        assert_eq!(
            to_text_vec(&[Some(1), None], &NullOr).unwrap(),
            vec!["1".to_string(), "null".to_string()]
        );
    }

    #[test]
    fn test_range_formatter() {
        let formatter = RangeFormatter::new().with_range(ViewRange::last());
        assert_eq!(formatter.format(&NUMBERS).unwrap(), "[15]");
        assert_eq!(formatter.format_nullable(&[Some(1), None]).unwrap(), "[null]");
        let hex = from_fn(|n: &i32| format!("{n:x}"));
        assert_eq!(formatter.format_with(&NUMBERS, &hex).unwrap(), "[f]");
    }
}
