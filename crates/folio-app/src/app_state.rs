use folio_terminal::{LineEditor, Payload, ScrollLayout, Terminal};
use folio_types::FolioConfig;

use crate::onboarding::OnboardingStore;

/// Something the renderer must print after an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emit {
    /// A new entry in the result log.
    Result { command: String, payload: Payload },
    /// A card from the scrollable résumé layout.
    Section(Payload),
    /// Wipe the visible output.
    ClearScreen,
    /// One-line status message.
    Notice(String),
    /// The onboarding tips panel.
    Tips,
    /// The command cheat sheet overlay.
    CheatSheet,
}

/// All mutable shell state.
pub struct AppState {
    pub config: FolioConfig,
    pub terminal: Terminal,
    pub editor: LineEditor,
    pub layout: ScrollLayout,
    pub onboarding: OnboardingStore,
    pub show_tips: bool,
    pub cheat_sheet_open: bool,
    /// Pending output, drained by the renderer.
    pub outbox: Vec<Emit>,
}

impl AppState {
    pub fn new(config: FolioConfig, terminal: Terminal, onboarding: OnboardingStore) -> Self {
        let layout = ScrollLayout::new(terminal.content());
        let show_tips = !onboarding.is_dismissed();
        Self {
            config,
            terminal,
            editor: LineEditor::new(),
            layout,
            onboarding,
            show_tips,
            cheat_sheet_open: false,
            outbox: Vec::new(),
        }
    }

    pub fn emit(&mut self, e: Emit) {
        self.outbox.push(e);
    }

    pub fn drain(&mut self) -> Vec<Emit> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state_in;

    #[test]
    fn tips_show_until_dismissed() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_in(dir.path());
        assert!(state.show_tips);
        assert!(!state.cheat_sheet_open);
        assert_eq!(state.layout.active(), "about");
    }

    #[test]
    fn drain_empties_outbox() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.emit(Emit::Notice("hi".into()));
        assert_eq!(state.drain(), [Emit::Notice("hi".into())]);
        assert!(state.drain().is_empty());
    }
}
