//! Shell configuration loaded from `folio.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Config file picked up from the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Runtime configuration for the folio shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolioConfig {
    /// Résumé JSON to load. `None` uses the embedded sample.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// Directory holding the durable session store.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// Prompt printed before the input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// ANSI styling on or off.
    #[serde(default = "yes")]
    pub color: bool,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".folio")
}
fn default_prompt() -> String {
    "guest@folio:~$".to_string()
}
fn default_log_filter() -> String {
    "warn".to_string()
}
fn yes() -> bool {
    true
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            state_dir: default_state_dir(),
            prompt: default_prompt(),
            log_filter: default_log_filter(),
            color: true,
        }
    }
}

impl FolioConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Path of the durable key/value store.
    pub fn storage_path(&self) -> PathBuf {
        self.state_dir.join("storage.json")
    }
}

/// Resolve the active configuration.
///
/// Resolution order:
/// 1. Explicit path (from `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. `./folio.toml` if it exists
/// 4. Built-in defaults
///
/// A named file that does not exist falls back to defaults with a warning;
/// a file that exists but fails to parse is an error.
pub fn resolve_config(explicit: Option<&Path>) -> Result<FolioConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    if let Some(path) = named {
        if path.is_file() {
            return FolioConfig::from_file(&path);
        }
        log::warn!(
            "Config '{}' not found -- falling back to defaults",
            path.display()
        );
        return Ok(FolioConfig::default());
    }

    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return FolioConfig::from_file(local);
    }
    Ok(FolioConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = FolioConfig::from_toml("").unwrap();
        assert_eq!(cfg, FolioConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = FolioConfig::from_toml("prompt = \"me@cv:~$\"\ncolor = false\n").unwrap();
        assert_eq!(cfg.prompt, "me@cv:~$");
        assert!(!cfg.color);
        assert_eq!(cfg.state_dir, PathBuf::from(".folio"));
        assert_eq!(cfg.log_filter, "warn");
        assert!(cfg.content_path.is_none());
    }

    #[test]
    fn content_path_is_read() {
        let cfg = FolioConfig::from_toml("content_path = \"content/resume.json\"").unwrap();
        assert_eq!(
            cfg.content_path.as_deref(),
            Some(Path::new("content/resume.json"))
        );
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(FolioConfig::from_toml("prompt = [").is_err());
    }

    #[test]
    fn storage_path_lives_in_state_dir() {
        let cfg = FolioConfig::from_toml("state_dir = \"/tmp/folio-state\"").unwrap();
        assert_eq!(
            cfg.storage_path(),
            PathBuf::from("/tmp/folio-state/storage.json")
        );
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults() {
        let cfg = resolve_config(Some(Path::new("/no/such/folio.toml"))).unwrap();
        assert_eq!(cfg.prompt, "guest@folio:~$");
    }
}
