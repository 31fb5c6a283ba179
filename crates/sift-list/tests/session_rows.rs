//! Layout invariants for session picker rows.
//!
//! 1. A rendered row is exactly as wide as the item.
//! 2. The timestamp, when shown, is the last thing before the right padding.
//! 3. Matched segments are drawn from the title's own characters.

use proptest::prelude::*;
use sift_list::{SegmentKind, Session, SessionItem, SessionRow};

const NOW: i64 = 1_700_000_000;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_title() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{1,8}",
            Just("世界".to_string()),
            Just("e\u{301}".to_string()),
            Just("\u{1F600}".to_string()),
        ],
        0..10,
    )
    .prop_map(|pieces| pieces.concat())
}

fn arb_item() -> impl Strategy<Value = SessionItem> {
    (
        arb_title(),
        0usize..60,
        any::<bool>(),
        0i64..(90 * 24 * 3600),
        any::<prop::sample::Index>(),
    )
        .prop_map(|(title, width, active, age, pick)| {
            let offsets: Vec<usize> = title.char_indices().map(|(i, _)| i).collect();
            let matched = if offsets.is_empty() {
                Vec::new()
            } else {
                let start = pick.index(offsets.len());
                offsets[start..].iter().copied().take(3).collect()
            };
            let session = Session::new("s", title, NOW - age, NOW - age);
            let mut item = SessionItem::new(session, active, NOW);
            item.set_width(width);
            item.set_match_offsets(matched);
            item
        })
}

fn time_segment(row: &SessionRow) -> Option<usize> {
    row.segments
        .iter()
        .position(|s| s.kind == SegmentKind::Time)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn row_width_matches_item(item in arb_item()) {
        let row = item.render();
        prop_assert_eq!(row.width(), item.size().0);
    }

    #[test]
    fn time_sits_before_right_padding(item in arb_item()) {
        let row = item.render();
        if let Some(idx) = time_segment(&row) {
            prop_assert_eq!(idx + 2, row.segments.len());
            prop_assert_eq!(row.segments[idx + 1].kind, SegmentKind::Padding);
            prop_assert_eq!(row.segments[idx - 1].kind, SegmentKind::Spacer);
        }
    }

    #[test]
    fn matched_segments_come_from_title(item in arb_item()) {
        let row = item.render();
        let title = item.session().title.clone();
        for segment in row.segments.iter().filter(|s| s.kind == SegmentKind::TitleMatch) {
            prop_assert!(
                title.contains(segment.text.as_str()),
                "{:?} not in {:?}", segment.text, title
            );
        }
    }
}

#[test]
fn narrow_widths_never_panic() {
    let session = Session::new("s", "一二三四五六七八九十", NOW - 60, NOW - 60);
    for width in 0..30 {
        let mut item = SessionItem::new(session.clone(), false, NOW);
        item.set_width(width);
        item.set_match_offsets(vec![27]);
        assert_eq!(item.render().width(), width, "width {width}");
    }
}
