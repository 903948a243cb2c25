//! recon CLI
//!
//! Reconciles a JSON or YAML config file against desired keys and prints
//! a JSON report.

mod apply;
mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use error::{CliError, Result};

const DEFAULT_LOG_LEVEL: &str = "info";

fn main() {
    if let Err(e) = run() {
        if let Some(report) = e.failure_report() {
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{json}");
            }
        }
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let request = apply::build_request(&cli)?;
    let outcome = recon_core::run(&request)?;

    if outcome.changed {
        tracing::info!(path = %outcome.file_path, dry_run = outcome.dry_run, "Changed");
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Log to stderr so the report on stdout stays machine readable.
///
/// `--verbose` forces debug output, otherwise `RUST_LOG` applies with a
/// default of `info`.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = log_filter(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok())?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}

/// An unparsable `RUST_LOG` falls back to the default level.
fn log_filter(verbose: bool, rust_log: Option<String>) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }
    match rust_log.and_then(|env| EnvFilter::try_new(env).ok()) {
        Some(filter) => Ok(filter),
        None => EnvFilter::try_new(DEFAULT_LOG_LEVEL).map_err(|e| CliError::Logging {
            message: e.to_string(),
        }),
    }
}
