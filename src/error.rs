//! Error types for sequence rendering.
//!
//! Rendering is mostly infallible: out-of-range bounds are clamped, never
//! reported. What can fail is narrow:
//!
//! - **Absent sequences**: an optional source that turned out to be `None`
//!   reached the formatter (see [`crate::format_source`])
//! - **Mapping failures**: a fallible element mapping returned an error; the
//!   partially built string is discarded
//! - **Traced failures**: a guarded operation failed and was annotated with a
//!   rendered provenance trace
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{format_source, Error, FormatTokens, ValueOf, ViewRange};
//!
//! let source: Option<&[i32]> = None;
//! let result = format_source(source, &ViewRange::all(), &ValueOf, &FormatTokens::default());
//! assert!(matches!(result, Err(Error::AbsentSequence)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while rendering a sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An absent (`None`) sequence was handed to the formatter.
    #[error("Invalid argument: sequence is absent")]
    AbsentSequence,

    /// The element mapping failed for the element at `index`.
    #[error("Mapping failed at index {index}: {msg}")]
    Mapping { index: usize, msg: String },

    /// A guarded operation failed; `trace` holds the rendered provenance.
    #[error("{message}{trace}")]
    Traced { trace: String, message: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the invalid-argument error raised for absent sequences.
    pub fn absent_sequence() -> Self {
        Error::AbsentSequence
    }

    /// Creates a mapping error for the element at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::Error;
    ///
    /// let err = Error::mapping(3, "not representable");
    /// assert!(err.to_string().contains("index 3"));
    /// ```
    pub fn mapping<T: fmt::Display>(index: usize, msg: T) -> Self {
        Error::Mapping {
            index,
            msg: msg.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_display() {
        let err = Error::mapping(2, "bad element");
        assert_eq!(err.to_string(), "Mapping failed at index 2: bad element");
    }

    #[test]
    fn test_traced_display() {
        let err = Error::Traced {
            trace: "\n >> at: main".to_string(),
            message: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "failed\n >> at: main");
    }
}
