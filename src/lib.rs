//! Kustomize Conventions Library
//!
//! Operator utilities for a Kustomize repository laid out as
//! `kubernetes/apps/<category>/<app>/{base,patches,components,overlays}` plus
//! `kubernetes/clusters/<cluster>/<entry>`.
//!
//! - [`kustomize::build`] inflates a Kustomize root into `debug_full.yaml` for inspection.
//! - [`validation`] walks the repository and reports convention violations as findings.

pub mod config;
pub mod constants;
pub mod kustomize;
pub mod runtime;
pub mod validation;

pub use config::ToolsConfig;
pub use kustomize::build::{inflate, InflateError, InflateOutcome};
pub use validation::{validate, Finding, Severity, ValidationError, ValidationReport};
