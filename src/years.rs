// src/years.rs
//! Lenient reign-range parsing.
//!
//! Raw ranges come in four shapes: `"1016"`, `"1509-1547"`, `"1952-"`
//! (open-ended, still reigning) and empty. Malformed segments silently
//! degrade to 0 instead of erroring; downstream duration math tolerates
//! the zeros.

use chrono::{Datelike, Utc};

const SEPARATOR: char = '-';

/// Current wall-clock calendar year (UTC). Stands in for the end of
/// open-ended ranges.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Parse a raw year range into `(start, end)`.
pub fn parse_reign(raw: &str) -> (i32, i32) {
    parse_reign_at(raw, current_year())
}

/// Same as [`parse_reign`] with an explicit "current year", so tests and
/// fixture parsing stay deterministic.
pub fn parse_reign_at(raw: &str, current_year: i32) -> (i32, i32) {
    if raw.trim().is_empty() {
        return (0, 0);
    }

    let parts: Vec<&str> = raw.split(SEPARATOR).collect();
    match parts.as_slice() {
        [single] => {
            let y = year_or_zero(single);
            (y, y)
        }
        [start, end] => {
            let s = year_or_zero(start);
            let e = if end.trim().is_empty() {
                current_year
            } else {
                year_or_zero(end)
            };
            (s, e)
        }
        // More than one separator: malformed, same degradation as above.
        _ => (0, 0),
    }
}

fn year_or_zero(s: &str) -> i32 {
    s.trim().parse::<i32>().unwrap_or(0)
}
