use std::path::Path;

use folio_terminal::{CommandRegistry, Terminal};
use folio_types::FolioConfig;
use folio_types::validate::embedded_resume;

use crate::app_state::AppState;
use crate::onboarding::OnboardingStore;

/// Fresh shell state with the bundled résumé and its store under `dir`.
pub fn state_in(dir: &Path) -> AppState {
    let config = FolioConfig {
        state_dir: dir.to_path_buf(),
        ..FolioConfig::default()
    };
    let terminal = Terminal::new(
        CommandRegistry::builtin().unwrap(),
        embedded_resume().unwrap(),
    );
    let onboarding = OnboardingStore::load(&config.storage_path());
    AppState::new(config, terminal, onboarding)
}
