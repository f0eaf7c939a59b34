//! Validation issue and report types.

use serde::Serialize;

const SUMMARY_MAX_ERRORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, located by a JSON-path-like `path` such as
/// `plan.phases[2].id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub code: &'static str,
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

/// Structured validation output shared by strict and lenient loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<Issue>,
    pub warnings: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no error-severity issue was produced.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(
        &mut self,
        code: &'static str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.errors.push(Issue {
            code,
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn add_warning(
        &mut self,
        code: &'static str,
        path: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.warnings.push(Issue {
            code,
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    /// One-line digest of the first few errors, for error messages.
    pub fn summary(&self) -> String {
        let mut summary = self
            .errors
            .iter()
            .take(SUMMARY_MAX_ERRORS)
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        if self.errors.len() > SUMMARY_MAX_ERRORS {
            summary.push_str(&format!("; ... ({} total errors)", self.errors.len()));
        }
        if summary.is_empty() {
            summary.push_str("validation failed");
        }
        summary
    }
}
