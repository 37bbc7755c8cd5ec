//! Verbose, line-per-element dumps of whole sequences.
//!
//! Where [`crate::format_view`] produces a compact one-liner, the inspector
//! reports the element type and length, then one indexed line per element:
//!
//! ```text
//! Reading Sequence...
//!  >> Type: i64
//!  >> Length: 3
//!  >> Contents: {
//!  [0] >> 1
//!  [1] >> 3
//!  [2] >> 5
//!     }
//! ```
//!
//! Absent and empty sequences produce a fixed one-line message instead. The
//! inspector always covers the whole sequence; it never windows.
//!
//! ## Examples
//!
//! ```rust
//! use seqview::inspect;
//!
//! let dump = inspect(Some(&[1i64, 3, 5][..])).unwrap();
//! assert!(dump.contains(" >> Length: 3"));
//! assert!(dump.contains("\n [2] >> 5"));
//!
//! assert_eq!(inspect::<i64>(None).unwrap(), "Sequence is absent");
//! assert_eq!(inspect::<i64>(Some(&[][..])).unwrap(), "Sequence is empty");
//! ```

use crate::mapping::{NullOr, ToText, ValueOf};
use crate::range::ViewRange;
use crate::render::format_view;
use crate::{FormatTokens, Result};
use std::any::type_name;
use std::fmt;

/// Message for an absent sequence.
pub const ABSENT: &str = "Sequence is absent";
/// Message for a sequence without elements.
pub const EMPTY: &str = "Sequence is empty";

const LINE: &str = "\n ";
const ROW_LINE: &str = "\n    ";
const FOOTER: &str = "\n    }";

fn header(type_name: &str, len: usize) -> String {
    format!("Reading Sequence...\n >> Type: {type_name}\n >> Length: {len}\n >> Contents: {{")
}

/// Short-circuits absent and empty sequences.
fn present<T>(seq: Option<&[T]>) -> std::result::Result<&[T], &'static str> {
    match seq {
        None => Err(ABSENT),
        Some([]) => Err(EMPTY),
        Some(seq) => Ok(seq),
    }
}

fn push_index(out: &mut String, index: usize) {
    out.push('[');
    out.push_str(&index.to_string());
    out.push_str("] >> ");
}

/// Renders one `(index, element)` pair as `[index] >> text`.
struct IndexedLine<'m, M: ?Sized>(&'m M);

impl<'a, T, M> ToText<(usize, &'a T)> for IndexedLine<'_, M>
where
    M: ToText<T> + ?Sized,
{
    fn to_text(&self, entry: &(usize, &'a T)) -> Result<String> {
        let mut out = String::new();
        self.write_text(entry, &mut out)?;
        Ok(out)
    }

    fn write_text(&self, &(index, element): &(usize, &'a T), out: &mut String) -> Result<()> {
        push_index(out, index);
        self.0.write_text(element, out)
    }
}

/// Renders one row of a two-dimensional sequence: a row header, then every
/// element of the row one indent level deeper.
struct RowBlock<'m, M: ?Sized, T> {
    mapping: &'m M,
    element: std::marker::PhantomData<fn(&T)>,
}

impl<'a, R, T, M> ToText<(usize, &'a R)> for RowBlock<'_, M, T>
where
    R: AsRef<[T]>,
    M: ToText<T> + ?Sized,
{
    fn to_text(&self, entry: &(usize, &'a R)) -> Result<String> {
        let mut out = String::new();
        self.write_text(entry, &mut out)?;
        Ok(out)
    }

    fn write_text(&self, &(row, elements): &(usize, &'a R), out: &mut String) -> Result<()> {
        out.push_str("\n <*> row: [");
        out.push_str(&row.to_string());
        out.push(']');
        for (column, element) in elements.as_ref().iter().enumerate() {
            out.push_str(ROW_LINE);
            push_index(out, column);
            self.mapping.write_text(element, out)?;
        }
        Ok(())
    }
}

/// Dumps every element of `seq` through `mapping`.
///
/// # Errors
///
/// Returns the first error produced by `mapping`.
pub fn inspect_with<T, M>(seq: Option<&[T]>, mapping: &M) -> Result<String>
where
    M: ToText<T> + ?Sized,
{
    let seq = match present(seq) {
        Ok(seq) => seq,
        Err(message) => return Ok(message.to_string()),
    };
    tracing::debug!(len = seq.len(), element = type_name::<T>(), "inspecting sequence");

    let entries: Vec<(usize, &T)> = seq.iter().enumerate().collect();
    let tokens = FormatTokens {
        prefix: header(type_name::<T>(), seq.len()) + LINE,
        join: LINE.to_string(),
        suffix: FOOTER.to_string(),
    };
    format_view(&entries, &ViewRange::all(), &IndexedLine(mapping), &tokens)
}

/// Dumps every element of `seq` through `Display`.
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn inspect<T: fmt::Display>(seq: Option<&[T]>) -> Result<String> {
    inspect_with(seq, &ValueOf)
}

/// Dumps every element of `seq`, printing `null` for each `None`.
///
/// # Examples
///
/// ```rust
/// use seqview::inspect_nullable;
///
/// let dump = inspect_nullable(Some(&[Some(5), None][..])).unwrap();
/// assert!(dump.contains("\n [1] >> null"));
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn inspect_nullable<T: fmt::Display>(seq: Option<&[Option<T>]>) -> Result<String> {
    inspect_with(seq, &NullOr)
}

/// Dumps a two-dimensional sequence row by row through `mapping`.
///
/// Rows are always rendered in full.
///
/// # Errors
///
/// Returns the first error produced by `mapping`.
pub fn inspect_nested_with<R, T, M>(seq: Option<&[R]>, mapping: &M) -> Result<String>
where
    R: AsRef<[T]>,
    M: ToText<T> + ?Sized,
{
    let rows = match present(seq) {
        Ok(rows) => rows,
        Err(message) => return Ok(message.to_string()),
    };
    tracing::debug!(rows = rows.len(), row = type_name::<R>(), "inspecting nested sequence");

    let entries: Vec<(usize, &R)> = rows.iter().enumerate().collect();
    let tokens = FormatTokens {
        prefix: header(type_name::<R>(), rows.len()),
        join: String::new(),
        suffix: FOOTER.to_string(),
    };
    let block = RowBlock {
        mapping,
        element: std::marker::PhantomData,
    };
    format_view(&entries, &ViewRange::all(), &block, &tokens)
}

/// Dumps a two-dimensional sequence row by row through `Display`.
///
/// # Examples
///
/// ```rust
/// use seqview::inspect_nested;
///
/// let grid = vec![vec![1.5, 2.0], vec![3.25]];
/// let dump = inspect_nested(Some(&grid[..])).unwrap();
/// assert!(dump.contains("\n <*> row: [1]\n    [0] >> 3.25"));
/// ```
///
/// # Errors
///
/// Fails only if an element's `Display` implementation fails.
pub fn inspect_nested<R, T>(seq: Option<&[R]>) -> Result<String>
where
    R: AsRef<[T]>,
    T: fmt::Display,
{
    inspect_nested_with(seq, &ValueOf)
}
