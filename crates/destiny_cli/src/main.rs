//! Command-line front end for `destiny_core`.
//!
//! # Responsibility
//! - Parse one birthdate argument and print the calculated chart.
//! - Keep all calculation logic inside the core crate.

mod text;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use destiny_core::{build_matrix, default_log_level, init_logging, AnalysisPayload};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "destiny")]
#[command(author, version, about = "Calculate a destiny matrix chart from a birthdate")]
struct Cli {
    /// Birthdate in YYYY-MM-DD format
    birthdate: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy()).context("failed to initialize logging")?;
        info!(
            "event=cli_start module=cli status=ok core_version={}",
            destiny_core::core_version()
        );
    }

    let result = build_matrix(&cli.birthdate)?;
    let payload = AnalysisPayload::from_result(&result);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
        OutputFormat::Text => print!("{}", text::render(&payload)),
    }
    Ok(())
}
