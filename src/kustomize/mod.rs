//! # Kustomize
//!
//! Kustomization documents, the build tool runner, and the inflator built on top of them.

pub mod build;
pub mod document;
pub mod runner;

pub use build::{find_kustomization_file, inflate, InflateError, InflateOutcome};
pub use document::{
    load_kustomization, DocumentError, HelmChart, Kustomization, PatchEntry, PatchSpec,
};
pub use runner::{CommandOutput, CommandRunner, SystemCommandRunner};
