#![forbid(unsafe_code)]

//! Grapheme-cluster measurement: byte offsets to display columns.
//!
//! Every cluster occupies at least one column. Zero-width clusters (lone
//! combining marks, zero-width spaces, control characters) are folded into
//! one column so that each visible cluster has a cell to live in; East Asian
//! wide glyphs and emoji take two.
//!
//! # Invariants
//!
//! 1. **Monotonicity**: `b1 <= b2` implies `column_of(b1) <= column_of(b2)`.
//! 2. **Contiguity**: cluster `n + 1` starts at the byte and column where
//!    cluster `n` ends.
//! 3. **Boundary alignment**: lookups never land inside a cluster.
//!
//! # Example
//! ```
//! use sift_text::measure::{Measurement, column_of};
//!
//! assert_eq!(column_of("hello", 3), 3);
//! // "世" is 3 bytes and 2 columns.
//! assert_eq!(column_of("世a", 3), 2);
//!
//! let m = Measurement::new("a世b");
//! assert_eq!(m.total_columns(), 4);
//! assert_eq!(m.byte_at_column(2), 4);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ranges::{ColumnRange, MatchRange};

/// Display width of one grapheme cluster, never less than one column.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width().max(1)
}

/// Total display width of `text`, summed cluster by cluster.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        // Every ASCII byte is its own cluster except "\r\n".
        return text.len() - text.matches("\r\n").count();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Yield `(byte_offset, columns)` for each grapheme cluster, in order.
pub fn measure(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    text.grapheme_indices(true)
        .map(|(byte_offset, grapheme)| (byte_offset, grapheme_width(grapheme)))
}

/// Column immediately preceding the first cluster that starts at or after
/// `target_byte`.
///
/// A target inside a cluster counts that whole cluster. Targets past the end
/// return the total width.
#[must_use]
pub fn column_of(text: &str, target_byte: usize) -> usize {
    let mut column = 0;
    for (byte_offset, width) in measure(text) {
        if byte_offset >= target_byte {
            break;
        }
        column += width;
    }
    column
}

/// One grapheme cluster with its byte and column placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cluster {
    /// Start byte in the source (inclusive).
    pub byte_start: usize,
    /// Length of the cluster in bytes.
    pub byte_len: usize,
    /// Start column (inclusive).
    pub column: usize,
    /// Display width in columns (at least 1).
    pub width: usize,
}

impl Cluster {
    /// End byte (exclusive).
    #[inline]
    #[must_use]
    pub const fn byte_end(&self) -> usize {
        self.byte_start + self.byte_len
    }

    /// End column (exclusive).
    #[inline]
    #[must_use]
    pub const fn column_end(&self) -> usize {
        self.column + self.width
    }
}

/// Precomputed cluster placements for one string.
///
/// Lookups are binary searches over the cluster list, so a single
/// measurement can answer every question the truncator asks about a title
/// without rescanning it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measurement {
    clusters: Vec<Cluster>,
    total_columns: usize,
    total_bytes: usize,
}

impl Measurement {
    /// Measure `text` cluster by cluster.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut clusters = Vec::with_capacity(text.len());
        let mut column = 0;
        for (byte_start, grapheme) in text.grapheme_indices(true) {
            let width = grapheme_width(grapheme);
            clusters.push(Cluster {
                byte_start,
                byte_len: grapheme.len(),
                column,
                width,
            });
            column += width;
        }
        Self {
            clusters,
            total_columns: column,
            total_bytes: text.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    #[inline]
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Same contract as the free [`column_of`].
    #[must_use]
    pub fn column_of(&self, target_byte: usize) -> usize {
        let idx = self
            .clusters
            .partition_point(|cluster| cluster.byte_start < target_byte);
        self.clusters
            .get(idx)
            .map_or(self.total_columns, |cluster| cluster.column)
    }

    /// The cluster containing `byte`, or `None` past the end.
    #[must_use]
    pub fn cluster_at(&self, byte: usize) -> Option<&Cluster> {
        let idx = self
            .clusters
            .partition_point(|cluster| cluster.byte_start <= byte);
        let cluster = self.clusters.get(idx.checked_sub(1)?)?;
        (byte < cluster.byte_end()).then_some(cluster)
    }

    /// Start byte of the first cluster whose column is `>= column`.
    ///
    /// Returns the text length when no such cluster exists.
    #[must_use]
    pub fn byte_at_column(&self, column: usize) -> usize {
        let idx = self
            .clusters
            .partition_point(|cluster| cluster.column < column);
        self.clusters
            .get(idx)
            .map_or(self.total_bytes, |cluster| cluster.byte_start)
    }

    /// Longest run of whole clusters starting at `start_byte` that fits in
    /// `max_columns`.
    ///
    /// Returns the exclusive end byte and the columns the run occupies.
    #[must_use]
    pub fn fit_from(&self, start_byte: usize, max_columns: usize) -> (usize, usize) {
        let base = self.column_of(start_byte);
        let limit = base + max_columns;
        let idx = self
            .clusters
            .partition_point(|cluster| cluster.column_end() <= limit);
        match idx.checked_sub(1).and_then(|last| self.clusters.get(last)) {
            Some(cluster) if cluster.byte_end() > start_byte => {
                (cluster.byte_end(), cluster.column_end() - base)
            }
            _ => (start_byte.min(self.total_bytes), 0),
        }
    }

    /// Map an inclusive byte range onto the inclusive columns it covers.
    ///
    /// Bounds that fall inside a cluster snap to that cluster. Returns `None`
    /// when the range starts past the end of the text.
    #[must_use]
    pub fn column_range(&self, range: MatchRange) -> Option<ColumnRange> {
        let first = self.cluster_at(range.start)?;
        let last = self
            .cluster_at(range.end)
            .or_else(|| self.clusters.last())
            .filter(|last| last.byte_start >= first.byte_start)
            .unwrap_or(first);
        Some(ColumnRange::new(first.column, last.column_end() - 1))
    }
}
