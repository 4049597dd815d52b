//! # Kustomize Build Execution
//!
//! Inflates a Kustomize root into a single rendered manifest for human inspection.
//!
//! The rendered output is written to `debug_full.yaml` next to the kustomization.
//! That file is a debugging aid only and must not be committed.

use crate::config::ToolsConfig;
use crate::constants::{DEBUG_OUTPUT_FILE, KUSTOMIZATION_FILE_NAMES};
use crate::kustomize::runner::CommandRunner;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

/// Inflation failure; every variant is terminal for the run
#[derive(Debug, Error)]
pub enum InflateError {
    #[error("kustomization.yaml not found in: {}", .0.display())]
    MissingKustomization(PathBuf),
    #[error(
        "'{0}' not found in PATH. Install kustomize \
         (https://kubectl.docs.kubernetes.io/installation/kustomize/) or set KUSTOMIZE_BIN"
    )]
    ToolNotFound(String),
    #[error("Kustomize build failed: {stderr}")]
    BuildFailed { status: Option<i32>, stderr: String },
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Result of a successful inflation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflateOutcome {
    /// Absolute path of the written `debug_full.yaml`
    pub output_path: PathBuf,
    pub bytes_written: usize,
}

/// First kustomization file name the build tool would pick up in `dir`
pub fn find_kustomization_file(dir: &Path) -> Option<PathBuf> {
    KUSTOMIZATION_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Run kustomize build in `path` and persist its output as `debug_full.yaml`
///
/// Fails fast: a missing kustomization, a missing build tool, a failed build or a
/// failed write each end the run. Rerunning overwrites the previous output.
pub fn inflate(
    path: &Path,
    config: &ToolsConfig,
    runner: &dyn CommandRunner,
) -> Result<InflateOutcome, InflateError> {
    let root = std::path::absolute(path).map_err(|source| InflateError::Io {
        context: format!("Failed to resolve path: {}", path.display()),
        source,
    })?;

    // Check if kustomization.yaml exists
    let Some(kustomization_file) = find_kustomization_file(&root) else {
        return Err(InflateError::MissingKustomization(root));
    };
    debug!("Found {}", kustomization_file.display());

    let args = config.build_args();
    info!(
        "Running {} {} in {}",
        config.kustomize_bin,
        args.join(" "),
        root.display()
    );

    let output = runner
        .run(&config.kustomize_bin, &args, &root)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                InflateError::ToolNotFound(config.kustomize_bin.clone())
            } else {
                InflateError::Io {
                    context: format!("Failed to execute {}", config.kustomize_bin),
                    source,
                }
            }
        })?;

    if !output.success() {
        let mut stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        if stderr.trim().is_empty() {
            stderr = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        }
        error!("Kustomize build failed: {}", stderr);
        return Err(InflateError::BuildFailed {
            status: output.status,
            stderr,
        });
    }

    let output_path = root.join(DEBUG_OUTPUT_FILE);
    std::fs::write(&output_path, &output.stdout).map_err(|source| InflateError::Io {
        context: format!("Failed to write {}", output_path.display()),
        source,
    })?;

    info!(
        "Wrote {} bytes to {}",
        output.stdout.len(),
        output_path.display()
    );

    Ok(InflateOutcome {
        output_path,
        bytes_written: output.stdout.len(),
    })
}
