//! Foundation types for folio.
//!
//! This crate holds what the terminal core and the shell share: the résumé
//! content model and its validation, the shell configuration, and the error
//! type.

pub mod config;
pub mod content;
pub mod error;
pub mod validate;

pub use config::{FolioConfig, resolve_config};
pub use content::Resume;
pub use error::{FolioError, Result, ValidationIssue};
