//! # Repository Structure
//!
//! Walks `kubernetes/apps/<category>/<app>` and `kubernetes/clusters/<cluster>` and
//! applies the layout checks, delegating content checks to [`crate::validation::rules`].

use crate::constants::{
    APPS_DIR, BASE_DIR, CLUSTERS_DIR, COMPONENTS_DIR, KUBERNETES_DIR, KUSTOMIZATION_FILE,
    OVERLAYS_DIR,
};
use crate::kustomize::document::{load_kustomization, Kustomization};
use crate::validation::exceptions::{exemption, ExceptionScope};
use crate::validation::finding::Finding;
use crate::validation::report::ValidationReport;
use crate::validation::rules::{check_helm_values, check_patches, check_paths};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Prerequisite failure that stops validation before any check runs
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("'kubernetes' directory not found in: {}", .0.display())]
    KubernetesDirNotFound(PathBuf),
}

/// Validate every app and cluster under `root/kubernetes`
///
/// Finding paths are reported relative to `root`. Apps are checked before
/// clusters, each in name order.
pub fn validate(root: &Path) -> Result<ValidationReport, ValidationError> {
    let kubernetes = root.join(KUBERNETES_DIR);
    if !kubernetes.is_dir() {
        return Err(ValidationError::KubernetesDirNotFound(root.to_path_buf()));
    }

    info!("Validating repository structure under {}", kubernetes.display());

    let mut findings = Vec::new();

    let apps = kubernetes.join(APPS_DIR);
    let mut app_count = 0usize;
    for category in subdirectories(&apps) {
        for app in subdirectories(&category) {
            app_count += 1;
            findings.extend(check_app(&app));
        }
    }

    let clusters = kubernetes.join(CLUSTERS_DIR);
    let mut cluster_count = 0usize;
    for cluster in subdirectories(&clusters) {
        cluster_count += 1;
        findings.extend(check_cluster(&cluster));
    }

    info!(
        "Checked {} app(s) and {} cluster(s): {} finding(s)",
        app_count,
        cluster_count,
        findings.len()
    );

    Ok(ValidationReport::new(
        findings
            .into_iter()
            .map(|finding| finding.relative_to(root))
            .collect(),
    ))
}

/// Check one app directory against the base/components/overlays convention
pub fn check_app(app: &Path) -> Vec<Finding> {
    debug!("Checking app {}", app.display());
    let mut findings = Vec::new();

    let base_file = app.join(BASE_DIR).join(KUSTOMIZATION_FILE);
    if base_file.is_file() {
        if let Some(doc) = load_or_report(&base_file, &mut findings) {
            findings.extend(check_helm_values(&doc, &base_file));
            findings.extend(check_paths(&doc, &base_file));
        }
    } else {
        findings.push(Finding::missing(
            &base_file,
            format!("app has no {BASE_DIR}/{KUSTOMIZATION_FILE}"),
        ));
    }

    let components = app.join(COMPONENTS_DIR);
    for component in subdirectories(&components) {
        let component_file = component.join(KUSTOMIZATION_FILE);
        if !component_file.is_file() {
            findings.push(Finding::invalid(
                &component,
                format!("component has no {KUSTOMIZATION_FILE}"),
            ));
            continue;
        }
        if let Some(doc) = load_or_report(&component_file, &mut findings) {
            findings.extend(check_patches(&doc, &component_file));
            findings.extend(check_paths(&doc, &component_file));
        }
    }

    let overlays = app.join(OVERLAYS_DIR);
    if overlays.is_dir() {
        let mut counted = 0usize;
        for overlay in subdirectories(&overlays) {
            let overlay_file = overlay.join(KUSTOMIZATION_FILE);
            if !overlay_file.is_file() {
                debug!("Overlay {} has no {}", overlay.display(), KUSTOMIZATION_FILE);
                continue;
            }
            counted += 1;
            if let Some(doc) = load_or_report(&overlay_file, &mut findings) {
                findings.extend(check_paths(&doc, &overlay_file));
            }
        }
        if counted == 0 {
            findings.push(Finding::empty(
                &overlays,
                format!("no overlay contains a {KUSTOMIZATION_FILE}"),
            ));
        }
    } else {
        findings.push(Finding::missing(
            &overlays,
            format!("app has no {OVERLAYS_DIR}/ directory"),
        ));
    }

    findings
}

/// Check one cluster directory: every entry is a Kustomize root, save named exceptions
pub fn check_cluster(cluster: &Path) -> Vec<Finding> {
    debug!("Checking cluster {}", cluster.display());
    let mut findings = Vec::new();

    for entry in subdirectories(cluster) {
        let name = entry
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(exception) = exemption(ExceptionScope::ClusterEntry, &name) {
            debug!("Skipping {}: {}", entry.display(), exception.reason);
            continue;
        }

        let entry_file = entry.join(KUSTOMIZATION_FILE);
        if !entry_file.is_file() {
            findings.push(Finding::missing(
                &entry_file,
                format!("cluster entry '{name}' has no {KUSTOMIZATION_FILE}"),
            ));
            continue;
        }
        if let Some(doc) = load_or_report(&entry_file, &mut findings) {
            findings.extend(check_paths(&doc, &entry_file));
        }
    }

    findings
}

/// Load a Kustomization, turning read/parse failures into an INVALID finding
fn load_or_report(file: &Path, findings: &mut Vec<Finding>) -> Option<Kustomization> {
    match load_kustomization(file) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("{}", e);
            findings.push(Finding::invalid(
                file,
                format!("unparseable kustomization: {e}"),
            ));
            None
        }
    }
}

/// Immediate subdirectories of `dir` in name order; empty when `dir` does not exist
fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_subdirectories_sorted_and_dirs_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let names: Vec<_> = subdirectories(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_subdirectories_of_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(subdirectories(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_load_or_report_parse_failure() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("kustomization.yaml");
        fs::write(&file, "resources: [unterminated\n").unwrap();

        let mut findings = Vec::new();
        assert!(load_or_report(&file, &mut findings).is_none());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, crate::validation::Severity::Invalid);
        assert_eq!(findings[0].path, file);
    }
}
