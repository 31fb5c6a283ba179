#![forbid(unsafe_code)]

//! Match-aware truncation with highlight remapping.
//!
//! A plain tail cut (`"hello wor…"`) is fine until the match the user typed
//! sits past the cut. [`truncate_with_matches`] keeps the last match on
//! screen by dropping a prefix instead (`"…world exa"`), then reports where
//! every surviving match landed in the rendered output.
//!
//! # Strategy
//!
//! | Condition                                   | Output                  |
//! |---------------------------------------------|-------------------------|
//! | text fits                                   | text unchanged          |
//! | zero budget or empty text                   | empty                   |
//! | budget of one column                        | bare cut, no ellipsis   |
//! | no matches, or last match fits a tail cut   | `prefix…`               |
//! | last match past the tail cut                | `…window`               |
//!
//! The ellipsis always costs exactly [`ELLIPSIS_WIDTH`] columns.
//!
//! # Example
//! ```
//! use sift_text::ranges::{ColumnRange, merge_offsets};
//! use sift_text::truncate::truncate_with_matches;
//!
//! let ranges = merge_offsets(&[12, 13, 14]); // "exa"
//! let out = truncate_with_matches("hello world example", &ranges, 10);
//! assert_eq!(out.text, "…world exa");
//! assert_eq!(out.highlights, vec![ColumnRange::new(7, 9)]);
//!
//! let out = truncate_with_matches("short", &[], 3);
//! assert_eq!(out.text, "sh…");
//! ```

use crate::measure::Measurement;
use crate::ranges::{ColumnRange, MatchRange, merge_offsets};

/// Glyph marking dropped text.
pub const ELLIPSIS: &str = "\u{2026}";

/// Columns budgeted for [`ELLIPSIS`].
pub const ELLIPSIS_WIDTH: usize = 1;

/// Which cut produced a [`Truncated`] result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TruncationKind {
    /// The text fit and was returned as-is.
    #[default]
    Untouched,
    /// Empty input or zero budget.
    Empty,
    /// Budget too small for an ellipsis; cut without one.
    Bare,
    /// Suffix dropped, trailing ellipsis appended.
    Tail,
    /// Prefix dropped to keep the last match visible, leading ellipsis.
    Head,
}

impl TruncationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Untouched => "untouched",
            Self::Empty => "empty",
            Self::Bare => "bare",
            Self::Tail => "tail",
            Self::Head => "head",
        }
    }
}

/// Rendered text plus the columns to highlight within it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truncated {
    /// Width-bounded output.
    pub text: String,
    /// Highlight spans in `text`'s column space, ascending.
    pub highlights: Vec<ColumnRange>,
    /// Cut that was applied.
    pub kind: TruncationKind,
}

impl Truncated {
    fn empty() -> Self {
        Self {
            text: String::new(),
            highlights: Vec::new(),
            kind: TruncationKind::Empty,
        }
    }

    /// Whether any part of the source text was dropped.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !matches!(self.kind, TruncationKind::Untouched)
    }
}

/// The slice of the source kept in the output.
#[derive(Debug, Clone, Copy)]
struct Window {
    start: usize,
    end: usize,
    leading_ellipsis: bool,
    trailing_ellipsis: bool,
}

/// Merge raw match offsets, then truncate.
#[must_use]
pub fn truncate_offsets(text: &str, offsets: &[usize], available: usize) -> Truncated {
    truncate_with_matches(text, &merge_offsets(offsets), available)
}

/// Truncate `text` to `available` columns, keeping the last match visible.
///
/// `ranges` are byte ranges in `text`, ascending. An anchor at or past the
/// end of `text` keeps the text's tail visible; offsets inside a cluster snap
/// to it.
#[must_use]
pub fn truncate_with_matches(text: &str, ranges: &[MatchRange], available: usize) -> Truncated {
    let span = tracing::debug_span!(
        "text.truncate",
        text_len = text.len(),
        available,
        ranges = ranges.len()
    );
    let _guard = span.enter();

    if text.is_empty() || available == 0 {
        tracing::debug!(strategy = "empty", "nothing to render");
        return Truncated::empty();
    }

    let measurement = Measurement::new(text);
    if measurement.total_columns() <= available {
        tracing::debug!(
            strategy = "untouched",
            columns = measurement.total_columns(),
            "text fits"
        );
        return Truncated {
            text: text.to_owned(),
            highlights: coalesce(
                ranges
                    .iter()
                    .filter_map(|range| measurement.column_range(*range)),
            ),
            kind: TruncationKind::Untouched,
        };
    }

    let (window, kind) = choose_window(&measurement, ranges, available);
    tracing::debug!(
        strategy = kind.as_str(),
        start_byte = window.start,
        end_byte = window.end,
        "truncated"
    );

    let mut rendered = String::with_capacity(window.end - window.start + 2 * ELLIPSIS.len());
    if window.leading_ellipsis {
        rendered.push_str(ELLIPSIS);
    }
    rendered.push_str(&text[window.start..window.end]);
    if window.trailing_ellipsis {
        rendered.push_str(ELLIPSIS);
    }

    Truncated {
        text: rendered,
        highlights: remap_highlights(&measurement, ranges, window),
        kind,
    }
}

fn choose_window(
    measurement: &Measurement,
    ranges: &[MatchRange],
    available: usize,
) -> (Window, TruncationKind) {
    let content = available.saturating_sub(ELLIPSIS_WIDTH);
    if content == 0 {
        let (end, _) = measurement.fit_from(0, available);
        let window = Window {
            start: 0,
            end,
            leading_ellipsis: false,
            trailing_ellipsis: false,
        };
        return (window, TruncationKind::Bare);
    }

    let tail = || {
        let (end, _) = measurement.fit_from(0, content);
        Window {
            start: 0,
            end,
            leading_ellipsis: false,
            trailing_ellipsis: true,
        }
    };

    // Columns `[column, column_end)` the last match must keep on screen. An
    // anchor past the end occupies the column just after the text.
    let anchor = ranges.last().map(|last| match measurement.cluster_at(last.end) {
        Some(cluster) => (cluster.column, cluster.column_end()),
        None => {
            let column = measurement.column_of(last.end);
            (column, column + 1)
        }
    });
    let Some((anchor_column, anchor_end)) = anchor else {
        return (tail(), TruncationKind::Tail);
    };

    // For a one-column cluster this is `anchor_column < content`.
    if anchor_end <= content {
        return (tail(), TruncationKind::Tail);
    }

    let start_column = anchor_end.saturating_sub(content).min(anchor_column);
    let start = measurement.byte_at_column(start_column);
    let (end, _) = measurement.fit_from(start, content);
    let window = Window {
        start,
        end,
        leading_ellipsis: true,
        trailing_ellipsis: false,
    };
    (window, TruncationKind::Head)
}

/// Clip each range to the window and rebase it onto the rendered output.
fn remap_highlights(
    measurement: &Measurement,
    ranges: &[MatchRange],
    window: Window,
) -> Vec<ColumnRange> {
    let base = measurement.column_of(window.start);
    let limit = measurement.column_of(window.end);
    let Some(last_column) = limit.checked_sub(1).filter(|&last| last >= base) else {
        return Vec::new();
    };
    let shift = if window.leading_ellipsis {
        ELLIPSIS_WIDTH
    } else {
        0
    };

    coalesce(
        ranges
            .iter()
            .filter_map(|range| measurement.column_range(*range))
            .filter_map(|columns| {
                let start = columns.start.max(base);
                let end = columns.end.min(last_column);
                (start <= end).then(|| ColumnRange::new(start - base + shift, end - base + shift))
            }),
    )
}

/// Fold ranges that landed on the same cluster. Input is ascending by start.
fn coalesce(columns: impl Iterator<Item = ColumnRange>) -> Vec<ColumnRange> {
    let mut out: Vec<ColumnRange> = Vec::new();
    for range in columns {
        match out.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => out.push(range),
        }
    }
    out
}
