//! # Structure Validation
//!
//! Checks that every app under `kubernetes/apps/<category>/` follows the
//! `base + patches/components + overlays` convention and that every cluster under
//! `kubernetes/clusters/` has a kustomization per entry.
//!
//! Individual problems never abort the walk: each becomes a [`Finding`] and the
//! whole tree is checked in one run.

pub mod exceptions;
pub mod finding;
pub mod report;
pub mod rules;
pub mod structure;

pub use finding::{Finding, Severity};
pub use report::ValidationReport;
pub use structure::{check_app, check_cluster, validate, ValidationError};
