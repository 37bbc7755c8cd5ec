//! Rendering layout reference
//!
//! This module documents the text produced by this library.
//!
//! # One-line layout
//!
//! Every one-line formatter produces
//!
//! ```text
//! prefix + map(e[start]) + join + map(e[start + 1]) + ... + join + map(e[end - 1]) + suffix
//! ```
//!
//! with the defaults
//!
//! | Token | Default |
//! |-------|---------|
//! | prefix | `[` |
//! | join | `, ` |
//! | suffix | `]` |
//!
//! An empty sequence always renders as `[]`, whatever the tokens and mapping.
//!
//! # Views
//!
//! | View | Raw start | Raw end (exclusive) | Sequence `[a, b, c, d, e]` |
//! |------|-----------|---------------------|----------------------------|
//! | `all()` | `0` | `len` | `[a, b, c, d, e]` |
//! | `first()` | `0` | `1` | `[a]` |
//! | `last()` | `len - 1` | `len` | `[e]` |
//! | `window(1, 3)` | `1` | `3 + 1` | `[b, c, d]` |
//! | `single(2)` | `2` | `2 + 1` | `[c]` |
//! | `limit(1, ToFirst)` | `0` | `1 + 1` | `[a, b]` |
//! | `limit(1, ToLast)` | `(len - 1) - 1` | `len` | `[d, e]` |
//!
//! # Clamping
//!
//! Raw bounds are clamped, never rejected:
//!
//! - start: `min(max(start, 0), len - 1)`
//! - end: `min(end, len)`
//! - the element at the clamped start is always rendered
//!
//! So out-of-range views fall back to the nearest boundary element:
//!
//! ```text
//! [a, b, c, d, e]
//! single(-4)    -> [a]
//! single(99)    -> [e]
//! window(7, 9)  -> [e]
//! window(3, 1)  -> [d]
//! limit(99, ToLast) -> [a, b, c, d, e]
//! ```
//!
//! # Absent elements
//!
//! Sequences of `Option<T>` rendered without a custom mapping print `null` for
//! each `None`:
//!
//! ```text
//! [Some(5), Some(7), None, Some(12), None]  ->  [5, 7, null, 12, null]
//! ```
//!
//! Custom mappings receive the `Option` and decide themselves.
//!
//! # Inspection layout
//!
//! ```text
//! Reading Sequence...
//!  >> Type: <element type>
//!  >> Length: <n>
//!  >> Contents: {
//!  [0] >> <e0>
//!  [n-1] >> <e(n-1)>
//!     }
//! ```
//!
//! Nested sequences replace the element lines with one block per row:
//!
//! ```text
//!  <*> row: [0]
//!     [0] >> <e00>
//!     [1] >> <e01>
//! ```
//!
//! Absent input prints `Sequence is absent`; empty input prints
//! `Sequence is empty`.
//!
//! # Trace layout
//!
//! Frames print as `function(file:line:column)`, `function(file:line)`,
//! `function(file)` or `function(Unknown Source)`. The default provenance
//! tokens give
//!
//! ```text
//!
//!  >> Provenance = [
//!  >> at: <frame 0>
//!  >> at: <frame 1>
//! ] <<
//! ```

// This module contains only documentation; no implementation code
