use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use crate::date::parse_date;
use crate::error::AgeError;

pub const PROMPT: &str = "Enter your date of birth in yyyy-mm-dd format";

/// Asks for a date of birth on `output` and parses the first word of the
/// next line from `input`.
///
/// End of input reads as an empty answer, which is malformed. So is a line
/// that is not valid UTF-8.
pub fn read_birth_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<NaiveDate, AgeError> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    let mut buf = Vec::new();
    let n = input.read_until(b'\n', &mut buf)?;
    debug!(bytes = n, "read birth date line");

    let line = std::str::from_utf8(&buf).map_err(|e| {
        AgeError::malformed(&String::from_utf8_lossy(&buf), e.to_string())
    })?;
    let token = line.split_whitespace().next().unwrap_or("");
    parse_date(token)
}
