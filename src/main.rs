mod age;
mod cli;
mod date;
mod error;
mod prompt;
mod report;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::Cli;
use std::io;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the prompt and the result.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let today = Local::now().date_naive();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::run(&cli, &mut stdin.lock(), &mut stdout.lock(), today) {
        let what = if e.is_malformed_input() {
            "invalid date"
        } else {
            "could not calculate age"
        };
        return Err(e).context(what);
    }

    Ok(())
}
