#![forbid(unsafe_code)]

//! Split rendered text into plain and highlighted runs.
//!
//! Styling layers that paint substrings rather than column spans can walk
//! the result of [`highlight_spans`] and underline every `highlighted` run.
//!
//! # Example
//! ```
//! use sift_text::highlight::highlight_spans;
//! use sift_text::ranges::ColumnRange;
//!
//! let spans = highlight_spans("…world exa", &[ColumnRange::new(7, 9)]);
//! let parts: Vec<_> = spans.iter().map(|s| (s.text, s.highlighted)).collect();
//! assert_eq!(parts, vec![("…world ", false), ("exa", true)]);
//! ```

use crate::measure::measure;
use crate::ranges::ColumnRange;

/// A maximal run of clusters sharing the same highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Partition `rendered` along the column ranges produced by the truncator.
///
/// A cluster is highlighted when its first column falls inside any range.
/// Spans never split a grapheme cluster.
#[must_use]
pub fn highlight_spans<'a>(rendered: &'a str, ranges: &[ColumnRange]) -> Vec<HighlightSpan<'a>> {
    let mut spans = Vec::new();
    let mut span_start = 0;
    let mut span_highlighted = false;
    let mut column = 0;

    for (byte_offset, width) in measure(rendered) {
        let highlighted = ranges.iter().any(|range| range.contains(column));
        if byte_offset > span_start && highlighted != span_highlighted {
            spans.push(HighlightSpan {
                text: &rendered[span_start..byte_offset],
                highlighted: span_highlighted,
            });
            span_start = byte_offset;
        }
        span_highlighted = highlighted;
        column += width;
    }

    if span_start < rendered.len() {
        spans.push(HighlightSpan {
            text: &rendered[span_start..],
            highlighted: span_highlighted,
        });
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts<'a>(spans: &[HighlightSpan<'a>]) -> Vec<(&'a str, bool)> {
        spans.iter().map(|s| (s.text, s.highlighted)).collect()
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(highlight_spans("", &[ColumnRange::new(0, 3)]).is_empty());
    }

    #[test]
    fn no_ranges_is_one_plain_span() {
        assert_eq!(
            parts(&highlight_spans("plain", &[])),
            vec![("plain", false)]
        );
    }

    #[test]
    fn leading_and_trailing_highlights() {
        let spans = highlight_spans("abcdef", &[ColumnRange::new(0, 1), ColumnRange::new(5, 5)]);
        assert_eq!(
            parts(&spans),
            vec![("ab", true), ("cde", false), ("f", true)]
        );
    }

    #[test]
    fn adjacent_ranges_join() {
        let spans = highlight_spans("abcd", &[ColumnRange::new(1, 1), ColumnRange::new(2, 2)]);
        assert_eq!(parts(&spans), vec![("a", false), ("bc", true), ("d", false)]);
    }

    #[test]
    fn wide_clusters_are_not_split() {
        // "世" covers columns 1..=2.
        let spans = highlight_spans("a世b", &[ColumnRange::new(1, 2)]);
        assert_eq!(parts(&spans), vec![("a", false), ("世", true), ("b", false)]);
    }
}
