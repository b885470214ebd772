//! Best-effort date/time parsing.
//!
//! Tries a fixed list of common layouts and returns the first match. Numeric
//! dates are read month-first, whatever the separator, falling back to
//! day-first only when the first component cannot be a month. Values carrying
//! a UTC offset keep their wall-clock time and offset; nothing is shifted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::table::Value;

/// Layouts with both a date and a time component.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
];

/// Layouts with an offset, e.g. `2024-01-05 10:00:00+02:00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-only layouts. `%B` accepts both short and long month names.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%d-%B-%Y",
];

/// Parse a date or date/time into a [`Value::DateTime`], or a
/// [`Value::DateTimeTz`] when the input carries an offset. Returns `None`
/// when no layout matches.
pub fn parse_datetime(input: &str) -> Option<Value> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Value::DateTimeTz(dt));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(Value::DateTimeTz(dt));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(Value::DateTimeTz(dt));
        }
    }

    parse_naive(s).map(Value::DateTime)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    parse_compact_date(s)
}

/// `YYYYMMDD`.
fn parse_compact_date(s: &str) -> Option<NaiveDateTime> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = s[0..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}
