//! Content guard: checks the résumé JSON before it ships.
//!
//! Usage: `validate-content [path]` (default `content/resume.json`).
//! Exits non-zero with one diagnostic per problem when validation fails.

use std::path::PathBuf;
use std::process::ExitCode;

use folio_types::FolioError;
use folio_types::validate::load_resume;

const DEFAULT_CONTENT: &str = "content/resume.json";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONTENT), PathBuf::from);

    match load_resume(&path) {
        Ok(resume) => {
            log::debug!(
                "{} roles, {} projects, {} certifications",
                resume.experience.len(),
                resume.projects.len(),
                resume.certifications.len()
            );
            println!("Resume content is valid.");
            ExitCode::SUCCESS
        },
        Err(FolioError::Validation(issues)) => {
            eprintln!("Resume content validation failed.");
            for issue in &issues {
                eprintln!("  - {issue}");
            }
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("Resume content validation failed.");
            eprintln!("  - {e}");
            ExitCode::FAILURE
        },
    }
}
