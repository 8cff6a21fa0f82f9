//! Timestamp parsing
//!
//! Source records carry timestamps like `2021-01-11T08:59:28.642790Z`. They are
//! normalized by turning the `T` separator into `+` and dropping the `Z`
//! suffix, then read as naive timestamps with an implicit zero UTC offset.
//!
//! Accepted after normalization: `YYYY-MM-DD`, `YYYY-MM-DD+HH`,
//! `YYYY-MM-DD+HH:MM` and `YYYY-MM-DD+HH:MM:SS[.f]`. Years are four digits, so
//! every accepted instant lies in 1..=9999 and the window arithmetic on it
//! stays in range.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use vaxtrack_diagnostics::{Result, VAX0004, VaxError};

/// Time layouts accepted after the `+` separator
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Additional layouts accepted for query times typed by a user
const QUERY_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Years representable in a record
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Apply the record normalization: every `T` becomes `+`, surrounding `Z`s go
pub fn normalize_timestamp(raw: &str) -> String {
    raw.replace('T', "+").trim_matches('Z').to_string()
}

/// `YYYY-MM-DD` with exactly two digits per field after a four digit year
fn parse_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if s.len() == 2 && s.bytes().all(|c| c.is_ascii_digit()) {
        return s.parse().ok().and_then(|hour| NaiveTime::from_hms_opt(hour, 0, 0));
    }
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

fn parse_normalized(s: &str) -> Option<NaiveDateTime> {
    match s.split_once('+') {
        Some((date, time)) => Some(parse_date(date)?.and_time(parse_time(time)?)),
        None => Some(parse_date(s)?.and_time(NaiveTime::MIN)),
    }
}

fn invalid(raw: &str) -> VaxError {
    VaxError::record(VAX0004, format!("invalid timestamp '{}'", raw))
}

/// Parse a timestamp from a source record
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    parse_normalized(&normalize_timestamp(raw)).ok_or_else(|| invalid(raw))
}

/// Parse a query instant
///
/// Accepts everything [`parse_timestamp`] does and ISO-like timestamps
/// without a zone suffix. Bare dates mean midnight.
pub fn parse_query_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    let t = match QUERY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        Some(t) => t,
        None => parse_timestamp(raw)?,
    };
    if !YEARS.contains(&t.year()) {
        return Err(invalid(raw));
    }
    Ok(t)
}
