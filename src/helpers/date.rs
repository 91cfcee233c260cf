//! Date helper functions

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

use crate::content::date::{parse_iso_date, parse_timestamp};

/// Format a date using Moment.js-compatible format string.
///
/// Returns `None` when the format asks for something chrono cannot print.
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> Some("2024-01-15")
/// ```
pub fn format_date<Z: TimeZone>(date: &DateTime<Z>, format: &str) -> Option<String>
where
    Z::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    let mut out = String::new();
    write!(out, "{}", date.format(&chrono_format)).ok()?;
    Some(out)
}

/// Format a front-matter date string for display.
///
/// Calendar dates are shown as written, without shifting them into the
/// site timezone. Unparsable dates are returned unchanged.
pub fn format_post_date(date: &str, format: &str, tz: Tz) -> String {
    let formatted = if let Some(d) = parse_iso_date(date.trim()) {
        d.and_hms_opt(0, 0, 0)
            .and_then(|dt| format_date(&Utc.from_utc_datetime(&dt), format))
    } else {
        parse_timestamp(date, tz).and_then(|dt| format_date(&dt.with_timezone(&tz), format))
    };
    formatted.unwrap_or_else(|| date.to_string())
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month (uppercase M)
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month (uppercase D)
        ("DDDD", "%j"),
        ("DD", "%d"),
        // Hour
        ("HH", "%H"),
        ("hh", "%I"),
        // Minute (lowercase m after MM)
        ("mm", "%M"),
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
        ("SSS", "%3f"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
