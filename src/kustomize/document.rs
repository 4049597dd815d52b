//! # Kustomization Documents
//!
//! Typed view of the parts of a `kustomization.yaml` the validator inspects.
//!
//! Only `helmCharts`, `patches`, `resources` and `components` are modelled; every
//! other key is ignored. Documents are read fresh for each check and never mutated.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a file on disk into a [`Kustomization`]
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parsed Kustomization document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub helm_charts: Vec<HelmChart>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patches: Vec<PatchEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub components: Vec<String>,
}

/// One `helmCharts` entry
///
/// `values_inline` is `Some` whenever the key is present, even with a null value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmChart {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub values_inline: Option<Value>,
    #[serde(default)]
    pub values_file: Option<String>,
}

/// One `patches` entry: either a bare file path or a patch mapping
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatchEntry {
    File(String),
    Spec(PatchSpec),
}

/// Mapping form of a `patches` entry
///
/// `patch` is `Some` whenever the key is present, even with a null value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatchSpec {
    #[serde(default, deserialize_with = "present")]
    pub patch: Option<Value>,
    #[serde(default)]
    pub path: Option<String>,
}

impl Kustomization {
    /// Parse a document from YAML text
    ///
    /// An empty or comment-only document is a valid, empty Kustomization.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let value: Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }

    /// `resources` then `components` entries, tagged with the key they came from
    pub fn references(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.resources
            .iter()
            .map(|entry| ("resources", entry.as_str()))
            .chain(
                self.components
                    .iter()
                    .map(|entry| ("components", entry.as_str())),
            )
    }
}

/// Read and parse a Kustomization file
pub fn load_kustomization(path: &Path) -> Result<Kustomization, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Kustomization::from_yaml(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `key:` with no value is as common as omitting the key
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Key presence, not value, is what the checks care about
#[allow(
    clippy::unnecessary_wraps,
    reason = "signature required by serde(deserialize_with) on an Option field"
)]
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
