//! Date helper functions

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Date-time layouts accepted without an offset; these are read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a post date into a comparable instant
///
/// Accepts RFC 3339 strings as well as date-only and offset-less date-time
/// strings. Values without an offset are taken to be UTC, so that
/// `2024-01-01` always sorts the same regardless of the server's zone.
pub fn parse_post_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt);
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().fixed_offset());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().fixed_offset());
        }
    }

    None
}

/// Format a post date for display using a strftime pattern
///
/// Dates that cannot be parsed are shown as written.
pub fn format_date(date: &str, format: &str) -> String {
    match parse_post_date(date) {
        Some(dt) => dt.format(format).to_string(),
        None => date.to_string(),
    }
}

/// Machine-readable form for `<time datetime="...">`
pub fn date_xml(date: &str) -> Option<String> {
    parse_post_date(date).map(|dt| dt.to_rfc3339())
}
