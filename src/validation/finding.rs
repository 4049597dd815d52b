//! # Findings
//!
//! A single validation problem: severity, the file or directory it concerns, and a message.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Classification of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Expected directory or file is absent
    Missing,
    /// Present but forbidden by convention (inline values, inline patches, unparseable files)
    Invalid,
    /// A declared reference does not resolve on disk
    Broken,
    /// Required folder exists but nothing in it satisfies the convention
    Empty,
    /// Stylistic concern, not necessarily a defect
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Missing => "MISSING",
            Severity::Invalid => "INVALID",
            Severity::Broken => "BROKEN",
            Severity::Empty => "EMPTY",
            Severity::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub path: PathBuf,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            severity,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn missing(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Missing, path, message)
    }

    pub fn invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Invalid, path, message)
    }

    pub fn broken(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Broken, path, message)
    }

    pub fn empty(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Empty, path, message)
    }

    pub fn warning(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, path, message)
    }

    /// Same finding with its path made relative to `root` when it lies underneath it
    #[must_use]
    pub fn relative_to(mut self, root: &Path) -> Self {
        if let Ok(stripped) = self.path.strip_prefix(root) {
            self.path = stripped.to_path_buf();
        }
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity,
            self.path.display(),
            self.message
        )
    }
}
