//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `https_scorecard` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use https_scorecard::initialization::init_logger_with;
use https_scorecard::{run_report, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_report(&config) {
        Ok(outcome) => {
            println!(
                "✅ {}: {} of {} domain{} eligible, {}% BOD 18-01 compliant",
                outcome.organization,
                outcome.eligible_domains,
                outcome.domain_count,
                if outcome.domain_count == 1 { "" } else { "s" },
                outcome.bod_1801_percentage
            );
            println!("Report written to {}", outcome.report_path.display());
            println!("Results attachment written to {}", outcome.attachment_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("https_scorecard error: {:#}", e);
            process::exit(1);
        }
    }
}
