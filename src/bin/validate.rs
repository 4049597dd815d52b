//! # Validate
//!
//! Checks a repository's `kubernetes/` tree against the app and cluster conventions
//! and prints every finding. Exits 1 when anything is found.
//!
//! ## Usage
//!
//! ```bash
//! # Validate the repository in the current directory
//! validate
//!
//! # Validate another checkout, machine-readable
//! validate ../platform --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kustomize_conventions::runtime::init_tracing;
use kustomize_conventions::validate;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Validate the base/overlays structure of a Kustomize repository
#[derive(Parser, Debug)]
#[command(name = "validate")]
#[command(about = "Validate the base/overlays structure of a Kustomize repository")]
#[command(long_about = None)]
struct Cli {
    /// Repository root containing the kubernetes/ directory
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let report = validate(&cli.root)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            report
                .to_json()
                .context("Failed to serialize validation report")?
        ),
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
