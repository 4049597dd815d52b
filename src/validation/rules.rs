//! # Kustomization Rules
//!
//! Content checks on a parsed Kustomization. Each rule is a pure function of the
//! document and the file it was loaded from, returning the findings it produced.
//! Relative entries resolve against the directory holding that file.

use crate::constants::REMOTE_REFERENCE_PREFIXES;
use crate::kustomize::document::{Kustomization, PatchEntry};
use crate::validation::finding::Finding;
use std::path::{Component, Path, PathBuf};

/// Directory relative entries in `file` resolve against
pub fn document_dir(file: &Path) -> &Path {
    file.parent().unwrap_or_else(|| Path::new("."))
}

/// Join `entry` onto `dir` and fold `.`/`..` by text, the way kustomize joins paths
///
/// `foo/../apps/bar` resolves to `apps/bar` whether or not `foo/` exists.
pub fn resolve_entry(dir: &Path, entry: &str) -> PathBuf {
    let mut out = PathBuf::new();
    for component in dir.join(entry).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Entry points at a remote location and is not resolved on disk
pub fn is_remote_reference(entry: &str) -> bool {
    REMOTE_REFERENCE_PREFIXES
        .iter()
        .any(|prefix| entry.starts_with(prefix))
}

/// Entry climbs with `../` towards `apps/` without starting at `../`,
/// which usually means the relative depth was miscounted
pub fn is_suspicious_relative_path(entry: &str) -> bool {
    entry.contains("../") && entry.contains("apps/") && !entry.starts_with("../")
}

/// `helmCharts`: no `valuesInline`, and any `valuesFile` must exist
///
/// A chart with neither key renders with its defaults and is accepted.
pub fn check_helm_values(doc: &Kustomization, file: &Path) -> Vec<Finding> {
    let dir = document_dir(file);
    let mut findings = Vec::new();

    for (index, chart) in doc.helm_charts.iter().enumerate() {
        let label = chart
            .name
            .clone()
            .unwrap_or_else(|| format!("#{index}"));

        if chart.values_inline.is_some() {
            findings.push(Finding::invalid(
                file,
                format!(
                    "helmCharts '{label}' uses valuesInline; move the values into a valuesFile"
                ),
            ));
        }

        if let Some(values_file) = &chart.values_file {
            if !resolve_entry(dir, values_file).exists() {
                findings.push(Finding::missing(
                    file,
                    format!("helmCharts '{label}' valuesFile '{values_file}' does not exist"),
                ));
            }
        }
    }

    findings
}

/// `patches`: every referenced patch file exists, no inline patch content
pub fn check_patches(doc: &Kustomization, file: &Path) -> Vec<Finding> {
    let dir = document_dir(file);
    let mut findings = Vec::new();

    for entry in &doc.patches {
        let path = match entry {
            PatchEntry::File(path) => Some(path),
            PatchEntry::Spec(spec) => {
                if spec.patch.is_some() {
                    findings.push(Finding::invalid(
                        file,
                        "inline patch content is forbidden; \
                         move it to a file and reference it with 'path'",
                    ));
                }
                spec.path.as_ref()
            }
        };

        if let Some(path) = path {
            if !resolve_entry(dir, path).exists() {
                findings.push(Finding::missing(
                    file,
                    format!("patch file '{path}' does not exist"),
                ));
            }
        }
    }

    findings
}

/// `resources` and `components`: local entries resolve, and relative climbs look sane
pub fn check_paths(doc: &Kustomization, file: &Path) -> Vec<Finding> {
    let dir = document_dir(file);
    let mut findings = Vec::new();

    for (key, entry) in doc.references() {
        if is_remote_reference(entry) {
            continue;
        }

        if !resolve_entry(dir, entry).exists() {
            findings.push(Finding::broken(
                file,
                format!("{key} entry '{entry}' does not resolve"),
            ));
        }

        if is_suspicious_relative_path(entry) {
            findings.push(Finding::warning(
                file,
                format!(
                    "{key} entry '{entry}' reaches into apps/ without a leading '../'; \
                     check the relative depth"
                ),
            ));
        }
    }

    findings
}
