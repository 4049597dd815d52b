//! # Constants
//!
//! Directory and file names that make up the repository convention.

/// Repository subtree holding all Kubernetes configuration
pub const KUBERNETES_DIR: &str = "kubernetes";

/// `kubernetes/apps/<category>/<app>`
pub const APPS_DIR: &str = "apps";

/// `kubernetes/clusters/<cluster>`
pub const CLUSTERS_DIR: &str = "clusters";

pub const BASE_DIR: &str = "base";
pub const COMPONENTS_DIR: &str = "components";
pub const OVERLAYS_DIR: &str = "overlays";

/// File name the validator requires in every Kustomize root
pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";

/// All root file names the build tool itself recognizes
pub const KUSTOMIZATION_FILE_NAMES: &[&str] =
    &["kustomization.yaml", "kustomization.yml", "Kustomization"];

/// Inflator output, written next to the inflated kustomization.
/// Never meant to be committed.
pub const DEBUG_OUTPUT_FILE: &str = "debug_full.yaml";

/// Entries starting with one of these are remote references and are not resolved on disk
pub const REMOTE_REFERENCE_PREFIXES: &[&str] = &["http", "github.com"];

/// Default build tool executable
pub const DEFAULT_KUSTOMIZE_BIN: &str = "kustomize";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "kustomize_conventions=info";

/// Tracing filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "kustomize_conventions=debug";
