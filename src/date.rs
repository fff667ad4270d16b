//! date.rs
//!
//! Strict `YYYY-MM-DD` parsing.
//!
//! Chrono's `%Y` and `%m` are lenient (signed years, single-digit months),
//! so the textual shape is checked first and chrono only validates that the
//! date exists on the calendar.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::AgeError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_LEN: usize = "YYYY-MM-DD".len();

/// Parses a birth or reference date. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, AgeError> {
    let trimmed = input.trim();

    if let Err(reason) = check_shape(trimmed) {
        debug!(input = trimmed, reason, "rejected date string");
        return Err(AgeError::malformed(trimmed, reason));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        debug!(input = trimmed, error = %e, "not a calendar date");
        AgeError::malformed(trimmed, e.to_string())
    })
}

fn check_shape(s: &str) -> Result<(), &'static str> {
    if s.is_empty() {
        return Err("empty input");
    }
    if s.len() != DATE_LEN {
        return Err("expected exactly 10 characters in YYYY-MM-DD form");
    }

    for (i, b) in s.bytes().enumerate() {
        let ok = match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err("expected YYYY-MM-DD");
        }
    }

    Ok(())
}
