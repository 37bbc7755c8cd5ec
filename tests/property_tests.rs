//! Property-based tests for range resolution and rendering.
//!
//! Covers the clamping guarantees across generated lengths and indices; the
//! integration tests pin the exact text for hand-picked cases.

use proptest::prelude::*;
use seqview::{format_view, resolve, to_string, FormatTokens, Limit, ValueOf, ViewRange};

fn any_view() -> impl Strategy<Value = ViewRange> {
    let index = -50isize..50;
    prop_oneof![
        Just(ViewRange::all()),
        Just(ViewRange::first()),
        Just(ViewRange::last()),
        (index.clone(), index.clone()).prop_map(|(start, end)| ViewRange::window(start, end)),
        index.clone().prop_map(ViewRange::single),
        (index, any::<bool>()).prop_map(|(count, to_last)| {
            let direction = if to_last { Limit::ToLast } else { Limit::ToFirst };
            ViewRange::limit(count, direction)
        }),
    ]
}

proptest! {
    #[test]
    fn prop_resolved_bounds_in_range(view in any_view(), len in 1usize..40) {
        let bounds = resolve(&view, len).expect("non-empty sequences always resolve");
        prop_assert!(bounds.start < bounds.end);
        prop_assert!(bounds.end <= len);
    }

    #[test]
    fn prop_empty_never_resolves(view in any_view()) {
        prop_assert_eq!(resolve(&view, 0), None);
    }

    #[test]
    fn prop_all_covers_everything(len in 1usize..40) {
        let bounds = resolve(&ViewRange::all(), len).unwrap();
        prop_assert_eq!((bounds.start, bounds.end), (0, len));
    }

    #[test]
    fn prop_single_in_range(len in 1usize..40, pick in 0usize..40) {
        let index = pick % len;
        let bounds = resolve(&ViewRange::single(index as isize), len).unwrap();
        prop_assert_eq!((bounds.start, bounds.end), (index, index + 1));
    }

    #[test]
    fn prop_window_in_range(len in 1usize..40, a in 0usize..40, b in 0usize..40) {
        let (start, end) = (a.min(b) % len, a.max(b) % len);
        let (start, end) = (start.min(end), start.max(end));
        let bounds = resolve(&ViewRange::window(start as isize, end as isize), len).unwrap();
        prop_assert_eq!((bounds.start, bounds.end), (start, end + 1));
    }

    #[test]
    fn prop_large_limits_cover_everything(len in 1usize..40, extra in 0isize..20) {
        let count = len as isize + extra;
        for direction in [Limit::ToFirst, Limit::ToLast] {
            let bounds = resolve(&ViewRange::limit(count, direction), len).unwrap();
            prop_assert_eq!((bounds.start, bounds.end), (0, len));
        }
    }

    #[test]
    fn prop_rendered_element_count(view in any_view(), seq in prop::collection::vec(any::<u16>(), 1..30)) {
        let bounds = resolve(&view, seq.len()).unwrap();
        let tokens = FormatTokens::joined("|");
        let text = format_view(&seq, &view, &ValueOf, &tokens).unwrap();
        prop_assert_eq!(text.matches('|').count(), bounds.len() - 1);
        prop_assert!(text.starts_with('['));
        prop_assert!(text.ends_with(']'));
    }

    #[test]
    fn prop_whole_sequence_matches_debug(seq in prop::collection::vec(any::<i32>(), 0..30)) {
        // Debug output of a Vec<i32> uses the same default tokens
        prop_assert_eq!(to_string(&seq).unwrap(), format!("{:?}", seq));
    }
}
