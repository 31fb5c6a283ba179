#![forbid(unsafe_code)]

//! Relative timestamps for list rows ("3 minutes ago", "Jan 2").

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Format a Unix timestamp (seconds) relative to `now` (seconds).
///
/// A zero timestamp means "never". Timestamps in the future read as
/// "just now". Anything two months or older falls back to a short UTC date.
#[must_use]
pub fn format_time_ago(timestamp: i64, now: i64) -> String {
    if timestamp == 0 {
        return "never".to_string();
    }

    let seconds = now.saturating_sub(timestamp).max(0);
    let minutes = seconds / MINUTE;
    let hours = seconds / HOUR;
    let days = seconds / DAY;
    let weeks = days / 7;
    let months = days / 30;

    if seconds < MINUTE {
        "just now".to_string()
    } else if minutes < 2 {
        "1 minute ago".to_string()
    } else if minutes < 60 {
        format!("{minutes} minutes ago")
    } else if hours < 2 {
        "1 hour ago".to_string()
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if days < 2 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if weeks < 2 {
        "1 week ago".to_string()
    } else if weeks < 4 {
        format!("{weeks} weeks ago")
    } else if months < 2 {
        "1 month ago".to_string()
    } else {
        short_date(timestamp)
    }
}

fn short_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map_or_else(|| "never".to_string(), |at| at.format("%b %-d").to_string())
}
