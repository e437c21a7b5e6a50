//! Error types for folio.

use std::fmt;
use std::io;

/// A single problem found while validating résumé content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending field (e.g. `contact.links[1].href`).
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Errors produced by folio.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("validation failed with {} issue(s): {}", .0.len(), join_issues(.0))]
    Validation(Vec<ValidationIssue>),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
