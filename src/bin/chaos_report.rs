//! Headless run: `chaos_report <data-file> [report-path]`.
//!
//! Prints the summary table and writes the text report. Exits with status 1
//! on any load, validation or write error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rusty_chaos::data::loader::load_file;
use rusty_chaos::report::{format_summary_table, save_report, DEFAULT_REPORT_FILE};
use rusty_chaos::{analyze_with, validate, AnalysisConfig};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .context("usage: chaos_report <data-file> [report-path]")?;
    let report_path = args
        .next()
        .map_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE), PathBuf::from);

    let config = AnalysisConfig::from_env()?;
    let table = load_file(&input).with_context(|| format!("loading {}", input.display()))?;
    let dataset = validate(&table).context("Data validation error")?;
    let results = analyze_with(&dataset, &config);

    println!("{}", format_summary_table(&results)?);
    save_report(&results, &report_path)?;
    println!("Report written to {}", report_path.display());
    Ok(())
}
