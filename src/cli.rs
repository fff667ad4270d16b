use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::Parser;
use tracing::{debug, info};

use crate::date::parse_date;
use crate::error::AgeError;
use crate::prompt::read_birth_date;
use crate::report::{AgeReport, OutputFormat};

#[derive(Debug, Default, Parser)]
#[command(name = "dob-age")]
#[command(version, about = "Print your age in whole years from a date of birth", long_about = None)]
pub struct Cli {
    /// Date of birth (YYYY-MM-DD); prompts on stdin when omitted
    #[arg(long, value_name = "DATE")]
    pub dob: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to today's local date
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Resolves both dates, computes the age and writes the report to `output`.
///
/// Nothing past the prompt is written if either date is malformed.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    input: &mut R,
    output: &mut W,
    today: NaiveDate,
) -> Result<AgeReport, AgeError> {
    let birth_date = match cli.dob.as_deref() {
        Some(dob) => parse_date(dob)?,
        None => read_birth_date(input, output)?,
    };

    let reference_date = match cli.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => today,
    };
    debug!(%birth_date, %reference_date, "resolved dates");

    let report = AgeReport::new(birth_date, reference_date);
    info!(age = report.age, "computed age");

    report.write_to(output, cli.output_format())?;
    Ok(report)
}
