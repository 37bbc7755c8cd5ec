//! Configuration of the text wrapped around rendered elements.
//!
//! This module provides [`FormatTokens`], the `prefix`/`join`/`suffix` triple
//! every formatter in this crate consumes:
//!
//! ```text
//! prefix + e0 + join + e1 + join + ... + suffix
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use seqview::{format_display_view, FormatTokens, ViewRange};
//!
//! let numbers = [1, 2, 3];
//!
//! // Default brackets
//! let text = format_display_view(&numbers, &ViewRange::all(), &FormatTokens::default()).unwrap();
//! assert_eq!(text, "[1, 2, 3]");
//!
//! // Pipe-separated, no brackets
//! let tokens = FormatTokens::new().with_prefix("").with_join(" | ").with_suffix("");
//! let text = format_display_view(&numbers, &ViewRange::all(), &tokens).unwrap();
//! assert_eq!(text, "1 | 2 | 3");
//! ```
//!
//! Tokens derive `serde` traits, so they can live in any configuration file:
//!
//! ```rust
//! use seqview::FormatTokens;
//!
//! let tokens: FormatTokens = serde_json::from_str(r#"{"join": "; "}"#).unwrap();
//! assert_eq!(tokens, FormatTokens::new().with_join("; "));
//! ```

use serde::{Deserialize, Serialize};

/// Opening token of the default layout.
pub const LEFT: &str = "[";
/// Closing token of the default layout.
pub const RIGHT: &str = "]";
/// Separator of the default layout.
pub const COMMA: &str = ", ";
/// Output for an empty sequence, whatever the tokens.
pub const EMPTY: &str = "[]";
/// Text of an absent element on the mapping-free path.
pub const NULL: &str = "null";

/// Prefix, join and suffix tokens for a rendered range.
///
/// # Examples
///
/// ```rust
/// use seqview::FormatTokens;
///
/// let tokens = FormatTokens::default();
/// assert_eq!(tokens.prefix, "[");
/// assert_eq!(tokens.join, ", ");
/// assert_eq!(tokens.suffix, "]");
///
/// let tokens = FormatTokens::labelled("ids");
/// assert_eq!(tokens.prefix, "ids=[");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatTokens {
    pub prefix: String,
    pub join: String,
    pub suffix: String,
}

impl Default for FormatTokens {
    fn default() -> Self {
        FormatTokens {
            prefix: LEFT.to_string(),
            join: COMMA.to_string(),
            suffix: RIGHT.to_string(),
        }
    }
}

impl FormatTokens {
    /// Creates the default `[`, `, `, `]` tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`FormatTokens::new`]; reads better at call sites that
    /// contrast several layouts.
    #[must_use]
    pub fn brackets() -> Self {
        Self::default()
    }

    /// Default tokens with a custom separator.
    #[must_use]
    pub fn joined(join: impl Into<String>) -> Self {
        Self::default().with_join(join)
    }

    /// Tokens rendering as `label=[a, b, c]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqview::{format_display_view, FormatTokens, ViewRange};
    ///
    /// let text = format_display_view(&[4, 2], &ViewRange::all(), &FormatTokens::labelled("ids")).unwrap();
    /// assert_eq!(text, "ids=[4, 2]");
    /// ```
    #[must_use]
    pub fn labelled(label: &str) -> Self {
        let mut prefix = String::with_capacity(label.len() + 2);
        prefix.push_str(label);
        prefix.push('=');
        prefix.push_str(LEFT);
        Self::default().with_prefix(prefix)
    }

    /// Tokens of the multi-line provenance layout used by
    /// [`crate::TracePrinter`].
    ///
    /// ```text
    ///
    ///  >> Provenance = [
    ///  >> at: frame_0
    ///  >> at: frame_1
    /// ] <<
    /// ```
    #[must_use]
    pub fn provenance() -> Self {
        FormatTokens {
            prefix: "\n >> Provenance = [\n >> at: ".to_string(),
            join: "\n >> at: ".to_string(),
            suffix: "\n] <<".to_string(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: impl Into<String>) -> Self {
        self.join = join.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Upper bound of the fixed text around `count` rendered elements.
    pub(crate) fn overhead(&self, count: usize) -> usize {
        self.prefix.len() + self.suffix.len() + self.join.len() * count.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let tokens = FormatTokens::new()
            .with_prefix("<")
            .with_join("; ")
            .with_suffix(">");
        assert_eq!(tokens.prefix, "<");
        assert_eq!(tokens.join, "; ");
        assert_eq!(tokens.suffix, ">");
    }

    #[test]
    fn test_presets() {
        assert_eq!(FormatTokens::brackets(), FormatTokens::default());
        assert_eq!(FormatTokens::joined(" ").join, " ");
        assert_eq!(FormatTokens::labelled("xs").prefix, "xs=[");
        assert_eq!(FormatTokens::labelled("xs").suffix, "]");
        assert!(FormatTokens::provenance().prefix.contains("Provenance"));
    }

    #[test]
    fn test_overhead() {
        let tokens = FormatTokens::default();
        assert_eq!(tokens.overhead(1), 2);
        assert_eq!(tokens.overhead(3), 6);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let tokens: FormatTokens = serde_json::from_str(r#"{"prefix": "("}"#).unwrap();
        assert_eq!(tokens.prefix, "(");
        assert_eq!(tokens.join, ", ");
        assert_eq!(tokens.suffix, "]");
    }
}
