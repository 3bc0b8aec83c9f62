use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Result, TaskError};

/// Accepted user input shapes, tried in order; first match wins.
/// Date-only shapes resolve to midnight.
const INPUT_FORMATS: [(&str, bool); 4] = [
    ("%Y-%m-%d %H%M", true),
    ("%Y-%m-%d", false),
    ("%d/%m/%Y %H%M", true),
    ("%d/%m/%Y", false),
];

/// Timestamp shape written to the backing store (minute precision).
const STORED_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Stand-in timestamp for stored records whose time field cannot be read.
pub fn epoch_sentinel() -> NaiveDateTime {
    NaiveDateTime::UNIX_EPOCH
}

/// Parse a date/time typed by the user (`/by`, `/from`, `/to` values).
pub fn parse_user(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for (fmt, has_time) in INPUT_FORMATS {
        let parsed = if has_time {
            NaiveDateTime::parse_from_str(s, fmt).ok()
        } else {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        };
        if let Some(dt) = parsed {
            return Ok(dt);
        }
    }
    Err(TaskError::UnparsableDate)
}

/// Parse a timestamp field from a stored record: strict ISO date-time first
/// (with or without seconds), then ISO date, then the user input shapes.
/// `None` means the caller should fall back to the epoch sentinel.
pub fn parse_stored(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, STORED_FORMAT))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .or_else(|| parse_user(s).ok())
}

pub fn format_stored(dt: &NaiveDateTime) -> String {
    dt.format(STORED_FORMAT).to_string()
}

/// `MMM d yyyy` when the time is exactly midnight, else
/// `MMM d yyyy, h:mma` (12-hour clock, AM/PM abutting the minutes).
pub fn format_display(dt: &NaiveDateTime) -> String {
    if dt.hour() == 0 && dt.minute() == 0 {
        dt.format("%b %-d %Y").to_string()
    } else {
        dt.format("%b %-d %Y, %-I:%M%p").to_string()
    }
}
