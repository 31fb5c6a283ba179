#![forbid(unsafe_code)]

//! Byte-space match ranges and their column-space counterparts.
//!
//! A fuzzy matcher reports one byte offset per matched grapheme cluster.
//! [`merge_offsets`] folds those offsets into maximal runs so that a
//! renderer can highlight `"exa"` as one span instead of three.
//!
//! # Example
//! ```
//! use sift_text::ranges::{MatchRange, merge_offsets};
//!
//! let ranges = merge_offsets(&[2, 3, 4, 9]);
//! assert_eq!(ranges, vec![MatchRange::new(2, 4), MatchRange::new(9, 9)]);
//! ```

use std::ops::Range;

/// An inclusive byte span covering one or more adjacent matched clusters.
///
/// `end` is the start byte of the last matched cluster, not one past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRange {
    /// First matched byte offset.
    pub start: usize,
    /// Start byte of the last matched cluster (inclusive).
    pub end: usize,
}

impl MatchRange {
    /// Create a range from inclusive byte bounds.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A range covering a single matched cluster.
    #[inline]
    #[must_use]
    pub const fn single(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }
}

/// An inclusive span of display columns to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRange {
    /// First highlighted column.
    pub start: usize,
    /// Last highlighted column (inclusive).
    pub end: usize,
}

impl ColumnRange {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of columns covered.
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.end - self.start + 1
    }

    /// Whether `column` falls inside this range.
    #[inline]
    #[must_use]
    pub const fn contains(self, column: usize) -> bool {
        self.start <= column && column <= self.end
    }

    /// Half-open view, for styling layers that take `start..stop`.
    #[inline]
    #[must_use]
    pub const fn to_exclusive(self) -> Range<usize> {
        self.start..self.end + 1
    }
}

/// Collapse strictly increasing match offsets into maximal contiguous runs.
///
/// Two offsets join the same run when the second is exactly one past the
/// first. Single linear pass.
#[must_use]
pub fn merge_offsets(offsets: &[usize]) -> Vec<MatchRange> {
    let Some((&first, rest)) = offsets.split_first() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut current = MatchRange::single(first);
    for &offset in rest {
        debug_assert!(
            offset > current.end,
            "match offsets must be strictly increasing ({offset} after {})",
            current.end
        );
        if offset == current.end + 1 {
            current.end = offset;
        } else {
            merged.push(current);
            current = MatchRange::single(offset);
        }
    }
    merged.push(current);
    merged
}
