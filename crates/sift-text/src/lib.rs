#![forbid(unsafe_code)]

//! Match-aware truncation and highlight mapping for terminal list items.
//!
//! # Role in sift
//! `sift-text` answers one question for a list renderer: given a title, the
//! byte offsets a fuzzy matcher reported, and a column budget, what string
//! should be drawn and which columns of it should be emphasised?
//!
//! # Pipeline
//! - [`ranges::merge_offsets`] folds matched byte offsets into runs.
//! - [`measure::Measurement`] maps bytes to display columns, one grapheme
//!   cluster at a time, every cluster at least one column wide.
//! - [`truncate::truncate_with_matches`] picks a tail or head cut, adds the
//!   ellipsis, and rebases highlights onto the rendered output.
//! - [`highlight::highlight_spans`] turns column highlights back into
//!   substrings for styling layers that need them.
//!
//! Everything here is pure and allocation-light; no state survives a call.

pub mod highlight;
pub mod measure;
pub mod ranges;
pub mod truncate;

pub use highlight::{HighlightSpan, highlight_spans};
pub use measure::{Cluster, Measurement, column_of, display_width, grapheme_width, measure};
pub use ranges::{ColumnRange, MatchRange, merge_offsets};
pub use truncate::{
    ELLIPSIS, ELLIPSIS_WIDTH, Truncated, TruncationKind, truncate_offsets, truncate_with_matches,
};
