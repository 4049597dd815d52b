//! # Tools Configuration
//!
//! Settings loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables.

use crate::constants::DEFAULT_KUSTOMIZE_BIN;

/// Configuration shared by the command-line tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Build tool executable, resolved on `PATH` unless it is a path itself
    pub kustomize_bin: String,
    /// Pass `--enable-helm` so `helmCharts` entries are rendered
    pub enable_helm: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            kustomize_bin: DEFAULT_KUSTOMIZE_BIN.to_string(),
            enable_helm: true,
        }
    }
}

impl ToolsConfig {
    /// Load configuration from environment variables with defaults
    ///
    /// - `KUSTOMIZE_BIN`: build tool executable (default `kustomize`)
    /// - `KUSTOMIZE_ENABLE_HELM`: `true`/`false` (default `true`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            kustomize_bin: std::env::var("KUSTOMIZE_BIN")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.kustomize_bin),
            enable_helm: env_var_or_default("KUSTOMIZE_ENABLE_HELM", defaults.enable_helm),
        }
    }

    /// Arguments for "build the current directory"
    pub fn build_args(&self) -> Vec<&'static str> {
        let mut args = vec!["build"];
        if self.enable_helm {
            args.push("--enable-helm");
        }
        args.push(".");
        args
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
