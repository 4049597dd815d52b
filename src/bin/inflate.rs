//! # Inflate
//!
//! Renders a Kustomize root, Helm charts included, into `debug_full.yaml` so the
//! fully materialized manifest can be inspected.
//!
//! ## Usage
//!
//! ```bash
//! inflate kubernetes/apps/observability/grafana/overlays/prod
//!
//! # Use a specific kustomize binary
//! KUSTOMIZE_BIN=/opt/bin/kustomize inflate kubernetes/clusters/prod/monitoring
//! ```

use anyhow::Result;
use clap::Parser;
use kustomize_conventions::constants::DEBUG_OUTPUT_FILE;
use kustomize_conventions::kustomize::{inflate, SystemCommandRunner};
use kustomize_conventions::runtime::init_tracing;
use kustomize_conventions::ToolsConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Render a Kustomize root into debug_full.yaml for inspection
#[derive(Parser, Debug)]
#[command(name = "inflate")]
#[command(about = "Render a Kustomize root (with Helm charts) into debug_full.yaml")]
#[command(long_about = None)]
struct Cli {
    /// Directory containing a kustomization.yaml
    path: PathBuf,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ToolsConfig::from_env();
    let outcome = inflate(&cli.path, &config, &SystemCommandRunner)?;

    println!(
        "✅ Inflated manifest written to {} ({} bytes)",
        outcome.output_path.display(),
        outcome.bytes_written
    );
    println!(
        "⚠️  {DEBUG_OUTPUT_FILE} is a debug artifact: do NOT commit it to version control"
    );

    Ok(())
}
