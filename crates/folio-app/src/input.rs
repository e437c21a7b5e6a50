use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app_state::{AppState, Emit};
use crate::commands;

/// Shell-level input, decoupled from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Submit,
    Complete,
    /// Shift+Tab: previous suggestion.
    CompleteBack,
    HistoryBack,
    HistoryForward,
    /// Ctrl+L: blank the input and forget recalled lines.
    ClearInput,
    ShowTips,
    ToggleCheatSheet,
    ReturnToHybrid,
    /// Run the n-th primary command chip.
    Chip(usize),
    Escape,
    Quit,
}

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Map a crossterm key event. Key releases and unbound keys map to `None`.
pub fn from_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let event = match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => InputEvent::Quit,
        KeyCode::Char('l') if ctrl => InputEvent::ClearInput,
        KeyCode::Char(c) if alt && c.is_ascii_digit() && c != '0' => {
            InputEvent::Chip(c as usize - '1' as usize)
        },
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(c) => InputEvent::Char(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Tab => InputEvent::Complete,
        KeyCode::BackTab => InputEvent::CompleteBack,
        KeyCode::Up => InputEvent::HistoryBack,
        KeyCode::Down => InputEvent::HistoryForward,
        KeyCode::F(1) => InputEvent::ShowTips,
        KeyCode::F(2) => InputEvent::ToggleCheatSheet,
        KeyCode::F(4) => InputEvent::ReturnToHybrid,
        KeyCode::Esc => InputEvent::Escape,
        _ => return None,
    };
    Some(event)
}

/// Apply one input event to the shell state.
pub fn handle_input(event: InputEvent, state: &mut AppState) -> InputResult {
    match event {
        InputEvent::Quit => return InputResult::Quit,
        InputEvent::Char(c) => state.editor.insert(c),
        InputEvent::Backspace => state.editor.backspace(),
        InputEvent::Complete => {
            state.editor.advance_suggestion(state.terminal.registry());
        },
        InputEvent::CompleteBack => {
            state.editor.retreat_suggestion(state.terminal.registry());
        },
        InputEvent::HistoryBack => state.editor.history_back(),
        InputEvent::HistoryForward => state.editor.history_forward(),
        InputEvent::ClearInput => state.editor.clear_input(),
        InputEvent::Submit => {
            if let Some(line) = state.editor.take_submission() {
                commands::run_submission(state, &line);
            }
        },
        InputEvent::Chip(i) => commands::run_chip(state, i),
        InputEvent::ShowTips => {
            state.show_tips = true;
            state.emit(Emit::Tips);
        },
        InputEvent::ToggleCheatSheet => {
            state.cheat_sheet_open = !state.cheat_sheet_open;
            if state.cheat_sheet_open {
                state.emit(Emit::CheatSheet);
            }
        },
        InputEvent::ReturnToHybrid => commands::return_to_hybrid(state),
        InputEvent::Escape => {
            if state.cheat_sheet_open {
                state.cheat_sheet_open = false;
            } else if state.show_tips {
                dismiss_tips(state);
            }
        },
    }
    InputResult::Continue
}

/// "Got it": hide the tips panel and remember the choice.
pub fn dismiss_tips(state: &mut AppState) {
    state.show_tips = false;
    if let Err(e) = state.onboarding.dismiss() {
        log::warn!("Could not persist onboarding flag: {e}");
    }
    state.emit(Emit::Notice(
        "Tips hidden. Press F1 to show them again.".to_string(),
    ));
}
