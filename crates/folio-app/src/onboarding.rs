//! Durable onboarding flag.
//!
//! The store is a JSON object on disk. Only one key is used: the onboarding
//! flag, whose value is `"dismissed"` once the tips panel has been closed.

use std::fs;
use std::path::{Path, PathBuf};

use folio_types::error::{FolioError, Result};
use serde_json::{Map, Value};

/// Storage key for the onboarding flag.
pub const ONBOARDING_KEY: &str = "folio-terminal-onboarding";

const DISMISSED: &str = "dismissed";

/// The onboarding flag, read once when the session starts.
#[derive(Debug, Clone)]
pub struct OnboardingStore {
    path: PathBuf,
    dismissed: bool,
}

impl OnboardingStore {
    /// Read the flag from `path`. A missing or unreadable store counts as
    /// "not dismissed".
    pub fn load(path: &Path) -> Self {
        let dismissed = match read_map(path) {
            Ok(map) => map.get(ONBOARDING_KEY).and_then(Value::as_str) == Some(DISMISSED),
            Err(e) => {
                log::warn!("Ignoring onboarding store {}: {e}", path.display());
                false
            },
        };
        Self {
            path: path.to_path_buf(),
            dismissed,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Record that the tips panel was dismissed.
    pub fn dismiss(&mut self) -> Result<()> {
        let mut map = read_map(&self.path).unwrap_or_default();
        map.insert(ONBOARDING_KEY.to_string(), Value::from(DISMISSED));
        write_map(&self.path, &map)?;
        self.dismissed = true;
        log::info!("Onboarding dismissed ({})", self.path.display());
        Ok(())
    }

    /// Forget the flag so the tips show again next session. A corrupt store
    /// is replaced with an empty object.
    pub fn reset(&mut self) -> Result<()> {
        let (mut map, rewrite) = match read_map(&self.path) {
            Ok(map) => (map, false),
            Err(e) => {
                log::warn!("Replacing onboarding store {}: {e}", self.path.display());
                (Map::new(), true)
            },
        };
        if map.remove(ONBOARDING_KEY).is_some() || rewrite {
            write_map(&self.path, &map)?;
        }
        self.dismissed = false;
        Ok(())
    }
}

fn read_map(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(FolioError::Storage(format!(
            "{} is not a JSON object",
            path.display()
        ))),
    }
}

fn write_map(path: &Path, map: &Map<String, Value>) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let text = serde_json::to_string_pretty(map)?;
    fs::write(path, text)?;
    Ok(())
}
