//! # Validation Report
//!
//! Ordered findings of one run, plus text and JSON rendering.

use crate::validation::finding::{Finding, Severity};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    findings: &'a [Finding],
}

impl ValidationReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }

    /// Banner followed by one `- <finding>` line per finding
    pub fn render_text(&self) -> String {
        if self.passed() {
            return "✅ Structure validation passed: \
                    all apps and clusters follow the base/overlays convention\n"
                .to_string();
        }

        let mut out = format!(
            "❌ Structure validation failed with {} finding(s):\n",
            self.findings.len()
        );
        for finding in &self.findings {
            // Writing to a String cannot fail
            let _ = writeln!(out, "- {finding}");
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            passed: self.passed(),
            findings: &self.findings,
        })
    }
}
