use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::compute_age;
use crate::error::AgeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub age: i32,
}

impl AgeReport {
    pub fn new(birth_date: NaiveDate, reference_date: NaiveDate) -> Self {
        Self {
            birth_date,
            reference_date,
            age: compute_age(birth_date, reference_date),
        }
    }

    /// The one-line human sentence, without a trailing newline.
    pub fn sentence(&self) -> String {
        format!("Your Age is : {}", self.age)
    }

    /// Writes the report as a single line in the given format.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), AgeError> {
        match format {
            OutputFormat::Text => writeln!(out, "{}", self.sentence())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
