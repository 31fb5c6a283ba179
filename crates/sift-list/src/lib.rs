#![forbid(unsafe_code)]

//! List rows built on `sift-text`.
//!
//! # Role in sift
//! `sift-list` is the consumer side of match-aware truncation: it budgets a
//! session title next to its relative timestamp, truncates it around the
//! user's match, and emits style-free row segments.
//!
//! - [`session_item`]: row layout for the session picker.
//! - [`time_ago`]: "3 minutes ago" formatting.
//! - [`overlay`]: the dialog stack the picker lives in.

pub mod overlay;
pub mod session_item;
pub mod time_ago;

pub use overlay::{Dialog, Overlay};
pub use session_item::{Segment, SegmentKind, Session, SessionItem, SessionRow};
pub use time_ago::format_time_ago;
