#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift_text::measure::{Measurement, display_width};
use sift_text::truncate::{ELLIPSIS, TruncationKind, truncate_offsets};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    offsets: Vec<u16>,
    available: u8,
}

fuzz_target!(|input: Input| {
    if input.text.len() > 4096 {
        return;
    }
    let mut offsets: Vec<usize> = input.offsets.iter().map(|&o| usize::from(o)).collect();
    offsets.sort_unstable();
    offsets.dedup();
    let available = usize::from(input.available);

    // Arbitrary offsets, including ones past the end or inside a cluster,
    // must never panic.
    let truncated = truncate_offsets(&input.text, &offsets, available);

    let width = display_width(&truncated.text);
    assert!(width <= available, "{width} columns exceed budget {available}");

    match truncated.kind {
        TruncationKind::Untouched => assert_eq!(truncated.text, input.text),
        TruncationKind::Tail => assert!(truncated.text.ends_with(ELLIPSIS)),
        TruncationKind::Head => assert!(truncated.text.starts_with(ELLIPSIS)),
        TruncationKind::Empty => assert!(truncated.text.is_empty()),
        TruncationKind::Bare => assert!(available <= 1),
    }

    let mut previous_end = None;
    for range in &truncated.highlights {
        assert!(range.start <= range.end);
        assert!(range.end < width);
        if let Some(end) = previous_end {
            assert!(range.start > end, "highlights overlap or are unordered");
        }
        previous_end = Some(range.end);
    }

    // Truncating the output again to its own width changes nothing.
    let again = truncate_offsets(&truncated.text, &[], width);
    assert_eq!(again.text, truncated.text);

    let measured = Measurement::new(&truncated.text);
    assert_eq!(measured.total_columns(), width);
});
