//! Shared fixture helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset of helpers")]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary repository checkout
pub struct RepoFixture {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl RepoFixture {
    /// Empty directory, no `kubernetes/`
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    /// Directory with an empty `kubernetes/`
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.dir("kubernetes");
        fixture
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create fixture dir");
        path
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// App with a chart backed by a values file and a single `prod` overlay
    pub fn conformant_app(&self, category: &str, app: &str) {
        let base = format!("kubernetes/apps/{category}/{app}");
        self.write(
            &format!("{base}/base/kustomization.yaml"),
            "resources:\n  - namespace.yaml\nhelmCharts:\n  - name: podinfo\n    valuesFile: values.yaml\n",
        );
        self.write(&format!("{base}/base/namespace.yaml"), "kind: Namespace\n");
        self.write(&format!("{base}/base/values.yaml"), "replicaCount: 1\n");
        self.write(
            &format!("{base}/overlays/prod/kustomization.yaml"),
            "resources:\n  - ../../base\n",
        );
    }

    /// Cluster whose entries all have a kustomization, plus an unmanaged `bootstrap/`
    pub fn conformant_cluster(&self, cluster: &str) {
        let base = format!("kubernetes/clusters/{cluster}");
        self.write(
            &format!("{base}/infrastructure/kustomization.yaml"),
            "resources:\n  - https://github.com/fluxcd/flux2/releases/download/v2.3.0/install.yaml\n",
        );
        self.write(&format!("{base}/bootstrap/README.md"), "apply by hand\n");
    }
}

pub fn rel(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
