//! Healthgate: a LocalStack startup gate.
//!
//! This is the application entry point. It initializes tracing, reads the
//! health payload from stdin, evaluates it, prints the one-line verdict to
//! stdout, and exits 0 only when every service is running.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthgate::{evaluate, HealthError};

/// Default log filter when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "healthgate=warn";

/// Exit code for input-contract violations (invalid JSON, missing field)
const EXIT_BAD_PAYLOAD: u8 = 2;

/// Healthgate: exit-code gate for LocalStack health-check payloads
#[derive(Parser, Debug)]
#[command(name = "healthgate", version, about)]
struct Args {
    /// Log level filter (e.g., "healthgate=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default.
    // Diagnostics go to stderr; stdout carries only the verdict line.
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            // Malformed input is the orchestrating script's bug; fail loud
            // and never emit a success line.
            tracing::error!("{}", e);
            eprintln!("healthgate: {}", e);
            ExitCode::from(EXIT_BAD_PAYLOAD)
        }
    }
}

fn run() -> Result<u8, HealthError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    tracing::debug!(bytes = input.len(), "read health payload from stdin");

    let outcome = evaluate(&input)?;
    println!("{}", outcome.message());

    Ok(outcome.exit_code() as u8)
}
