//! Résumé content validation.
//!
//! Structural checks come from deserialising into [`Resume`]; semantic checks
//! (email shape, link URLs) run afterwards and collect every issue instead of
//! stopping at the first one.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::content::{EMBEDDED_RESUME, Resume};
use crate::error::{FolioError, Result, ValidationIssue};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S+$").unwrap());

static HTTP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:https?)://[^/\s?#]+").unwrap());

/// Whether `s` looks like an email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Whether `s` is an absolute URL. `http`/`https` URLs must carry a host.
pub fn is_valid_url(s: &str) -> bool {
    if !URL_RE.is_match(s) {
        return false;
    }
    let lower = s.to_ascii_lowercase();
    if lower.starts_with("http:") || lower.starts_with("https:") {
        return HTTP_RE.is_match(s);
    }
    true
}

/// Run the semantic checks on an already-typed résumé.
pub fn check_resume(resume: &Resume) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !is_valid_email(&resume.contact.email) {
        issues.push(ValidationIssue::new(
            "contact.email",
            format!("invalid email: {:?}", resume.contact.email),
        ));
    }
    for (i, link) in resume.contact.links.iter().enumerate() {
        if !is_valid_url(&link.href) {
            issues.push(ValidationIssue::new(
                format!("contact.links[{i}].href"),
                format!("invalid url: {:?}", link.href),
            ));
        }
    }
    issues
}

/// Parse and validate résumé JSON.
pub fn parse_resume(json: &str) -> Result<Resume> {
    let resume: Resume = serde_json::from_str(json).map_err(|e| {
        FolioError::Validation(vec![ValidationIssue::new(
            format!("line {} column {}", e.line(), e.column()),
            e.to_string(),
        )])
    })?;
    let issues = check_resume(&resume);
    if !issues.is_empty() {
        return Err(FolioError::Validation(issues));
    }
    Ok(resume)
}

/// Read and validate a résumé file.
pub fn load_resume(path: &Path) -> Result<Resume> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| FolioError::Content(format!("{}: {e}", path.display())))?;
    let resume = parse_resume(&json)?;
    log::info!("Loaded résumé content from {}", path.display());
    Ok(resume)
}

/// The sample résumé shipped with the repository.
pub fn embedded_resume() -> Result<Resume> {
    parse_resume(EMBEDDED_RESUME)
}
