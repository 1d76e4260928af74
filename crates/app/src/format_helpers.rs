/// Shared formatting utilities for the UI layer.
use chrono::{DateTime, NaiveDate};

/// What a browser's `Date` prints for input it cannot parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a `YYYY-MM-DD` date or an RFC 3339 timestamp.
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date_str).ok().map(|dt| dt.date_naive()))
}

/// Format a date as "March 15, 2024" (long month, unpadded day).
///
/// The calendar date is taken as written, with no timezone conversion.
/// Falls back to [`INVALID_DATE`] if parsing fails.
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
