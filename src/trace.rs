//! Rendering of frame traces with a shared, mutable style.
//!
//! A trace is an ordered list of [`Frame`]s describing where something came
//! from. [`TracePrinter`] renders any [`ViewRange`] of such a list, one frame
//! per line, using the tokens held by a [`StyleHandle`]:
//!
//! ```text
//!
//!  >> Provenance = [
//!  >> at: load_config(src/config.rs:42:9)
//!  >> at: main(src/main.rs:7:5)
//! ] <<
//! ```
//!
//! ## Shared style
//!
//! A [`StyleHandle`] is one style record shared by every clone of the handle.
//! Reassigning its tokens through any clone changes the output of every later
//! render that uses it; the last writer wins. Renders already completed are
//! not affected, and each render reads the tokens once, when it starts.
//!
//! The handle does no locking. It is neither `Send` nor `Sync`, so it cannot
//! be mutated from another thread while a render is running.
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{Frame, StyleHandle, TracePrinter};
//!
//! let frames = vec![
//!     Frame::new("parse").with_location("src/parse.rs", 10),
//!     Frame::new("main"),
//! ];
//!
//! let style = StyleHandle::provenance();
//! let printer = TracePrinter::with_style(style.clone());
//! assert_eq!(
//!     printer.render_all(&frames).unwrap(),
//!     "\n >> Provenance = [\n >> at: parse(src/parse.rs:10)\n >> at: main(Unknown Source)\n] <<"
//! );
//!
//! style.set_prefix("<< ");
//! style.set_join(" <- ");
//! style.set_suffix(" >>");
//! assert_eq!(
//!     printer.render_all(&frames).unwrap(),
//!     "<< parse(src/parse.rs:10) <- main(Unknown Source) >>"
//! );
//! ```

use crate::mapping::ToText;
use crate::range::ViewRange;
use crate::render::format_view;
use crate::{Error, FormatTokens, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::panic::Location;
use std::rc::Rc;

/// Function name used when a frame is built from a bare source location.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// One entry of a trace: a function and, when known, where in the source it
/// was.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl Frame {
    /// Creates a frame without source information.
    pub fn new(function: impl Into<String>) -> Self {
        Frame {
            function: function.into(),
            file: None,
            line: None,
            column: None,
        }
    }

    /// Creates a frame for `function` at the caller's source location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::Frame;
    ///
    /// let frame = Frame::caller("example");
    /// assert_eq!(frame.function, "example");
    /// assert!(frame.line.is_some());
    /// ```
    #[track_caller]
    pub fn caller(function: impl Into<String>) -> Self {
        let mut frame = Frame::from(Location::caller());
        frame.function = function.into();
        frame
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    fn write_line(&self, out: &mut String) {
        out.push_str(&self.function);
        out.push('(');
        match &self.file {
            Some(file) => {
                out.push_str(file);
                if let Some(line) = self.line {
                    out.push(':');
                    out.push_str(&line.to_string());
                    if let Some(column) = self.column {
                        out.push(':');
                        out.push_str(&column.to_string());
                    }
                }
            }
            None => out.push_str("Unknown Source"),
        }
        out.push(')');
    }
}

impl From<&Location<'_>> for Frame {
    fn from(location: &Location<'_>) -> Self {
        Frame::new(UNKNOWN_FUNCTION)
            .with_location(location.file(), location.line())
            .with_column(location.column())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::new();
        self.write_line(&mut line);
        f.write_str(&line)
    }
}

/// The one-line text of a frame: `function(file:line:column)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameLine;

impl ToText<Frame> for FrameLine {
    fn to_text(&self, frame: &Frame) -> Result<String> {
        let mut out = String::new();
        frame.write_line(&mut out);
        Ok(out)
    }

    fn write_text(&self, frame: &Frame, out: &mut String) -> Result<()> {
        frame.write_line(out);
        Ok(())
    }
}

/// A shared, reassignable [`FormatTokens`] record.
///
/// Clones share the same record. While [`StyleHandle::update`] runs, any other
/// access to the same record through [`StyleHandle::get`] or the setters
/// panics. Renders started from inside `update` fail with an error instead.
#[derive(Clone, Debug, Default)]
pub struct StyleHandle(Rc<RefCell<FormatTokens>>);

impl StyleHandle {
    pub fn new(tokens: FormatTokens) -> Self {
        StyleHandle(Rc::new(RefCell::new(tokens)))
    }

    /// A new record holding [`FormatTokens::provenance`].
    pub fn provenance() -> Self {
        Self::new(FormatTokens::provenance())
    }

    /// A copy of the current tokens.
    pub fn get(&self) -> FormatTokens {
        self.0.borrow().clone()
    }

    /// A copy of the current tokens, or an error while the record is being
    /// edited through [`StyleHandle::update`].
    fn snapshot(&self) -> Result<FormatTokens> {
        self.0
            .try_borrow()
            .map(|tokens| tokens.clone())
            .map_err(|_| Error::custom("style record is being edited"))
    }

    /// Replaces all tokens, returning the previous ones.
    pub fn set(&self, tokens: FormatTokens) -> FormatTokens {
        self.0.replace(tokens)
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.0.borrow_mut().prefix = prefix.into();
    }

    pub fn set_join(&self, join: impl Into<String>) {
        self.0.borrow_mut().join = join.into();
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        self.0.borrow_mut().suffix = suffix.into();
    }

    /// Edits the tokens in place.
    ///
    /// ```rust
    /// use seqview::StyleHandle;
    ///
    /// let style = StyleHandle::default();
    /// style.update(|tokens| tokens.join = " ".to_string());
    /// assert_eq!(style.get().join, " ");
    /// ```
    pub fn update<R>(&self, edit: impl FnOnce(&mut FormatTokens) -> R) -> R {
        edit(&mut self.0.borrow_mut())
    }

    /// Whether both handles point at the same record.
    pub fn shares_record_with(&self, other: &StyleHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Renders frame traces with the tokens of a [`StyleHandle`].
#[derive(Clone, Debug)]
pub struct TracePrinter {
    style: StyleHandle,
}

impl Default for TracePrinter {
    fn default() -> Self {
        TracePrinter {
            style: StyleHandle::provenance(),
        }
    }
}

impl TracePrinter {
    /// A printer with its own provenance-styled record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A printer reading its tokens from `style`.
    pub fn with_style(style: StyleHandle) -> Self {
        TracePrinter { style }
    }

    /// The record this printer reads from; mutate it to restyle later renders.
    pub fn style(&self) -> &StyleHandle {
        &self.style
    }

    /// Renders `range` of `frames`, one frame per line.
    ///
    /// An empty trace renders as `[]`.
    ///
    /// # Errors
    ///
    /// Fails when called from inside [`StyleHandle::update`] on the record
    /// this printer reads from. Frame rendering itself cannot fail.
    pub fn render(&self, frames: &[Frame], range: &ViewRange) -> Result<String> {
        let tokens = self.style.snapshot()?;
        tracing::debug!(frames = frames.len(), ?range, "rendering trace");
        format_view(frames, range, &FrameLine, &tokens)
    }

    /// Renders every frame.
    ///
    /// # Errors
    ///
    /// See [`TracePrinter::render`].
    pub fn render_all(&self, frames: &[Frame]) -> Result<String> {
        self.render(frames, &ViewRange::all())
    }

    /// Runs `op`, annotating a failure with the rendered `frames`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::{Error, Frame, TracePrinter};
    ///
    /// let printer = TracePrinter::new();
    /// let frames = [Frame::new("load")];
    /// let result: Result<(), Error> = printer.guard(&frames, || Err("disk full"));
    ///
    /// let err = result.unwrap_err();
    /// assert!(err.to_string().starts_with("disk full\n >> Provenance = [\n >> at: load"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Traced`] when `op` fails.
    pub fn guard<T, E, F>(&self, frames: &[Frame], op: F) -> Result<T>
    where
        E: fmt::Display,
        F: FnOnce() -> std::result::Result<T, E>,
    {
        match op() {
            Ok(value) => Ok(value),
            Err(err) => {
                let trace = self.render_all(frames)?;
                tracing::debug!(error = %err, "guarded operation failed");
                Err(Error::Traced {
                    trace,
                    message: err.to_string(),
                })
            }
        }
    }
}
