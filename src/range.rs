//! Range selection and resolution.
//!
//! A [`ViewRange`] describes *which part* of a sequence to render without
//! knowing the sequence's length. It is resolved against an actual length only
//! when it is applied, so a single value can be reused across sequences of any
//! size.
//!
//! Resolution happens in two steps:
//!
//! 1. [`ViewRange::raw_bounds`] maps the length to raw, possibly out-of-range
//!    `(start, end)` indices (end exclusive)
//! 2. [`Bounds::clamp`] forces them into the sequence
//!
//! Clamping never rejects a request. A start before the first element snaps to
//! index `0`, a start past the end snaps to the last index, and at least one
//! element is always selected from a non-empty sequence.
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{resolve, Bounds, Limit, ViewRange};
//!
//! assert_eq!(resolve(&ViewRange::all(), 5), Some(Bounds::new(0, 5)));
//! assert_eq!(resolve(&ViewRange::window(1, 3), 5), Some(Bounds::new(1, 4)));
//! assert_eq!(resolve(&ViewRange::limit(1, Limit::ToLast), 5), Some(Bounds::new(3, 5)));
//!
//! // Past the end: degrades to the last element instead of an empty slice
//! assert_eq!(resolve(&ViewRange::single(42), 5), Some(Bounds::new(4, 5)));
//!
//! // Nothing to select in an empty sequence
//! assert_eq!(resolve(&ViewRange::all(), 0), None);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The side from which [`ViewRange::limit`] starts counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limit {
    /// Count from the first element forwards.
    ToFirst,
    /// Count from the last element backwards.
    ToLast,
}

/// A length-agnostic description of the sub-range of a sequence to render.
///
/// Two ranges are equal when they were built by the same constructor with the
/// same arguments. Ranges that merely resolve to the same bounds are not equal:
///
/// ```rust
/// use seqview::{resolve, ViewRange};
///
/// assert_eq!(resolve(&ViewRange::first(), 3), resolve(&ViewRange::window(0, 0), 3));
/// assert_ne!(ViewRange::first(), ViewRange::window(0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewRange {
    /// Every element.
    #[default]
    All,
    /// The first element only.
    First,
    /// The last element only.
    Last,
    /// Elements `start..=end`, both inclusive.
    Window { start: isize, end: isize },
    /// The element at one index.
    Single(isize),
    /// The first or last `count + 1` elements.
    Limited { count: isize, direction: Limit },
}

impl ViewRange {
    /// Selects every element.
    #[must_use]
    pub const fn all() -> Self {
        ViewRange::All
    }

    /// Selects the first element.
    #[must_use]
    pub const fn first() -> Self {
        ViewRange::First
    }

    /// Selects the last element.
    #[must_use]
    pub const fn last() -> Self {
        ViewRange::Last
    }

    /// Selects the elements between `start` and `end`, both inclusive.
    ///
    /// `start` truncates at `0`, `end` at the last index.
    #[must_use]
    pub const fn window(start: isize, end: isize) -> Self {
        ViewRange::Window { start, end }
    }

    /// Selects a single element.
    ///
    /// An index below `0` selects the first element; an index past the end
    /// selects the last one.
    #[must_use]
    pub const fn single(index: isize) -> Self {
        ViewRange::Single(index)
    }

    /// Selects `count` elements beyond the first (or last) one, counting in
    /// `direction`.
    ///
    /// If `count` reaches past the sequence, the whole sequence is selected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::{resolve, Bounds, Limit, ViewRange};
    ///
    /// let head = ViewRange::limit(2, Limit::ToFirst);
    /// assert_eq!(resolve(&head, 10), Some(Bounds::new(0, 3)));
    ///
    /// let tail = ViewRange::limit(2, Limit::ToLast);
    /// assert_eq!(resolve(&tail, 10), Some(Bounds::new(7, 10)));
    /// ```
    #[must_use]
    pub const fn limit(count: isize, direction: Limit) -> Self {
        ViewRange::Limited { count, direction }
    }

    /// Computes the raw `(start, end)` pair for a sequence of `len` elements.
    ///
    /// The result is not clamped and may lie outside `0..len`. Arithmetic
    /// saturates at the `isize` limits.
    #[must_use]
    pub fn raw_bounds(&self, len: usize) -> (isize, isize) {
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        match *self {
            ViewRange::All => (0, len),
            ViewRange::First => (0, 1),
            ViewRange::Last => (len - 1, len),
            ViewRange::Window { start, end } => (start, end.saturating_add(1)),
            ViewRange::Single(index) => (index, index.saturating_add(1)),
            ViewRange::Limited {
                count,
                direction: Limit::ToFirst,
            } => (0, count.saturating_add(1)),
            ViewRange::Limited {
                count,
                direction: Limit::ToLast,
            } => ((len - 1).saturating_sub(count), len),
        }
    }

    /// Resolves this range against a sequence of `len` elements.
    ///
    /// Returns `None` for an empty sequence.
    #[must_use]
    pub fn resolve(&self, len: usize) -> Option<Bounds> {
        let (start, end) = self.raw_bounds(len);
        Bounds::clamp(start, end, len)
    }
}

/// Concrete `[start, end)` indices into a non-empty sequence.
///
/// Bounds produced by [`Bounds::clamp`] or [`ViewRange::resolve`] always
/// satisfy `start < end <= len` for the length they were resolved against.
/// Bounds built by hand with [`Bounds::new`] carry no such guarantee; inverted
/// ones are empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub start: usize,
    pub end: usize,
}

impl Bounds {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Bounds { start, end }
    }

    /// Clamps raw indices into a sequence of `len` elements.
    ///
    /// - `start` is forced into `0..=len - 1`
    /// - `end` is capped at `len`
    /// - the element at `start` is always included, so `end > start`
    ///
    /// Returns `None` when `len == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::Bounds;
    ///
    /// assert_eq!(Bounds::clamp(-3, 2, 4), Some(Bounds::new(0, 2)));
    /// assert_eq!(Bounds::clamp(9, 12, 4), Some(Bounds::new(3, 4)));
    /// assert_eq!(Bounds::clamp(2, 1, 4), Some(Bounds::new(2, 3)));
    /// assert_eq!(Bounds::clamp(0, 1, 0), None);
    /// ```
    #[must_use]
    pub fn clamp(start: isize, end: isize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let clamped_start = usize::try_from(start).map_or(0, |s| s.min(last));
        let clamped_end = usize::try_from(end)
            .map_or(0, |e| e.min(len))
            .max(clamped_start + 1);

        let bounds = Bounds::new(clamped_start, clamped_end);
        if !bounds.matches(start, end) {
            tracing::trace!(
                raw_start = start,
                raw_end = end,
                len,
                start = bounds.start,
                end = bounds.end,
                "clamped view bounds"
            );
        }
        Some(bounds)
    }

    fn matches(&self, start: isize, end: isize) -> bool {
        usize::try_from(start).ok() == Some(self.start) && usize::try_from(end).ok() == Some(self.end)
    }

    /// Number of selected elements; zero for inverted bounds.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Bounds> for Range<usize> {
    fn from(bounds: Bounds) -> Self {
        bounds.as_range()
    }
}

/// Resolves `range` against a sequence of `len` elements.
///
/// Equivalent to [`ViewRange::resolve`].
#[must_use]
pub fn resolve(range: &ViewRange, len: usize) -> Option<Bounds> {
    range.resolve(len)
}
