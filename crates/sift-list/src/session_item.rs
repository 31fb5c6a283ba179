#![forbid(unsafe_code)]

//! One row of the session picker: a match-aware title and a timestamp.
//!
//! ```text
//! │ fix flaky ws reconnect test          3 minutes ago │
//! │ …o world exa                       Active now    │
//! ```
//!
//! The row is produced as a list of [`Segment`]s tagged with a
//! [`SegmentKind`]; the caller's theme decides how each kind is painted.
//!
//! # Example
//! ```
//! use sift_list::session_item::{Session, SessionItem};
//!
//! let session = Session::new("s1", "hello world example", 100, 100);
//! let mut item = SessionItem::new(session, true, 160);
//! item.set_width(26);
//! item.set_match_offsets(vec![12, 13, 14]);
//!
//! let row = item.render();
//! assert_eq!(row.plain(), " …o world exa  Active now ");
//! ```

use sift_text::highlight::highlight_spans;
use sift_text::measure::display_width;
use sift_text::ranges::{ColumnRange, merge_offsets};
use sift_text::truncate::truncate_with_matches;

use crate::time_ago::format_time_ago;

/// Columns of padding on each side of the row.
pub const ROW_PADDING: usize = 1;
/// Minimum gap between the title and the timestamp.
pub const TIME_GAP: usize = 2;
/// Below this many title columns the timestamp is dropped.
pub const MIN_TITLE_WIDTH: usize = 10;
/// Timestamp text for the session currently open.
pub const ACTIVE_LABEL: &str = "Active now";

/// A stored conversation session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub id: String,
    pub title: String,
    /// Unix seconds.
    pub created_at: i64,
    /// Unix seconds; zero when never updated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_at: i64,
}

impl Session {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: i64,
        updated_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at,
            updated_at,
        }
    }

    /// Timestamp shown in the list: the update time, or the creation time
    /// when the session was never touched after creation.
    #[must_use]
    pub fn display_timestamp(&self) -> i64 {
        if self.updated_at == 0 || self.updated_at == self.created_at {
            self.created_at
        } else {
            self.updated_at
        }
    }
}

/// What a [`Segment`] of a row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SegmentKind {
    /// Row padding on either edge.
    Padding,
    /// Title text outside any match.
    Title,
    /// Title text the user's query matched.
    TitleMatch,
    /// Blank fill between title and timestamp.
    Spacer,
    /// The relative timestamp or [`ACTIVE_LABEL`].
    Time,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    fn blank(width: usize, kind: SegmentKind) -> Self {
        Self::new(" ".repeat(width), kind)
    }
}

/// A laid-out row, ready for a theme to paint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionRow {
    pub segments: Vec<Segment>,
    /// Match highlights in the title's own column space.
    pub title_highlights: Vec<ColumnRange>,
    pub focused: bool,
}

impl SessionRow {
    /// Row text without any styling.
    #[must_use]
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width of the whole row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| display_width(&s.text)).sum()
    }
}

/// A session as shown in the picker list.
#[derive(Debug, Clone)]
pub struct SessionItem {
    session: Session,
    width: usize,
    focused: bool,
    is_active: bool,
    match_offsets: Vec<usize>,
    time_ago: String,
}

impl SessionItem {
    /// Build an item, formatting its timestamp relative to `now` (Unix
    /// seconds) once up front.
    #[must_use]
    pub fn new(session: Session, is_active: bool, now: i64) -> Self {
        let time_ago = format_time_ago(session.display_timestamp(), now);
        Self {
            session,
            width: 0,
            focused: false,
            is_active,
            match_offsets: Vec::new(),
            time_ago,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.session.id
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Text the fuzzy matcher runs against.
    #[must_use]
    pub fn filter_value(&self) -> &str {
        &self.session.title
    }

    /// Byte offsets into the title reported by the matcher, ascending.
    pub fn set_match_offsets(&mut self, offsets: Vec<usize>) {
        self.match_offsets = offsets;
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// `(width, height)`; rows are always one line tall.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.width, 1)
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Lay out the row at the current width.
    #[must_use]
    pub fn render(&self) -> SessionRow {
        let left_pad = ROW_PADDING.min(self.width);
        let right_pad = ROW_PADDING.min(self.width - left_pad);
        let inner_width = self.width - left_pad - right_pad;

        let mut time_text = if self.is_active {
            ACTIVE_LABEL
        } else {
            self.time_ago.as_str()
        };
        let mut time_width = display_width(time_text);
        let mut title_width = inner_width.saturating_sub(time_width + TIME_GAP);
        if title_width < MIN_TITLE_WIDTH {
            title_width = inner_width;
            time_text = "";
            time_width = 0;
        }
        tracing::trace!(
            session = %self.session.id,
            inner_width,
            title_width,
            time_dropped = time_text.is_empty(),
            "session row layout"
        );

        let ranges = merge_offsets(&self.match_offsets);
        let title = truncate_with_matches(&self.session.title, &ranges, title_width);

        let mut segments = Vec::new();
        if left_pad > 0 {
            segments.push(Segment::blank(left_pad, SegmentKind::Padding));
        }
        for span in highlight_spans(&title.text, &title.highlights) {
            let kind = if span.highlighted {
                SegmentKind::TitleMatch
            } else {
                SegmentKind::Title
            };
            segments.push(Segment::new(span.text, kind));
        }
        let title_fill = title_width.saturating_sub(display_width(&title.text));
        if title_fill > 0 {
            segments.push(Segment::blank(title_fill, SegmentKind::Title));
        }
        if !time_text.is_empty() {
            let spacer = inner_width - title_width - time_width;
            segments.push(Segment::blank(spacer, SegmentKind::Spacer));
            segments.push(Segment::new(time_text, SegmentKind::Time));
        }
        if right_pad > 0 {
            segments.push(Segment::blank(right_pad, SegmentKind::Padding));
        }

        SessionRow {
            segments,
            title_highlights: title.highlights,
            focused: self.focused,
        }
    }
}
