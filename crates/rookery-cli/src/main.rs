//! Rookery CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use rookery_cli::{Args, error_adapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Parse configuration first
    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Rookery");
    debug!(args:?; "Parsed arguments");

    // Run the application
    match rookery_cli::run(&args) {
        Ok(summary) => {
            info!(
                written = summary.written(),
                failed = summary.failed();
                "Run complete"
            );
            if summary.failed() > 0 {
                error!(
                    "{} input(s) failed, {} diagram(s) written; see diagnostics above",
                    summary.failed(),
                    summary.written()
                );
                process::exit(1);
            }
        }
        Err(err) => {
            error_adapter::log_report(&err);
            process::exit(1);
        }
    }
}
