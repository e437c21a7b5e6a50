use folio_terminal::registry::names;
use folio_terminal::{Mode, SCROLL_START, Signal};

use crate::app_state::{AppState, Emit};

pub const TERMINAL_ONLY_NOTICE: &str =
    "Terminal-only mode enabled. Run `toggle` or press F4 to reopen the scrollable résumé view.";
pub const HYBRID_NOTICE: &str = "Hybrid mode: terminal plus the scrollable résumé layout.";

/// Submit a line to the interpreter and queue whatever it produced.
pub fn run_submission(state: &mut AppState, line: &str) {
    let Some(submission) = state.terminal.submit(line) else {
        return;
    };

    if submission.result_id.is_some()
        && let Some(result) = state.terminal.session().results().last()
    {
        let emit = Emit::Result {
            command: result.command.clone(),
            payload: result.payload.clone(),
        };
        state.emit(emit);
    }

    for signal in submission.signals {
        process_signal(signal, state);
    }
}

/// React to one interpreter signal.
pub fn process_signal(signal: Signal, state: &mut AppState) {
    match signal {
        Signal::ModeChanged(mode) => {
            log::debug!("Mode changed to {mode}");
            let notice = match mode {
                Mode::Terminal => TERMINAL_ONLY_NOTICE,
                Mode::Hybrid => HYBRID_NOTICE,
            };
            state.emit(Emit::Notice(notice.to_string()));
        },
        Signal::ScrollToSection(id) => focus_section(state, &id),
        Signal::CommandResolved {
            command,
            definition,
        } => match definition {
            Some(def) => {
                log::debug!("'{command}' resolved to '{}'", def.name);
                if def.name == names::CLEAR {
                    state.emit(Emit::ClearScreen);
                }
            },
            None => log::debug!("'{command}' did not resolve"),
        },
    }
}

/// Move layout focus to `id` and, in hybrid mode, show it.
pub fn focus_section(state: &mut AppState, id: &str) {
    state.layout.focus(id);
    if state.terminal.mode() != Mode::Hybrid {
        return;
    }
    let resume = state.terminal.content();
    if id == SCROLL_START {
        let cards = state.layout.render(resume);
        for card in cards {
            state.emit(Emit::Section(card));
        }
    } else if let Some(section) = state.layout.get(id) {
        let card = state.layout.card(section, resume);
        state.emit(Emit::Section(card));
    }
}

/// "Return to hybrid view" control.
pub fn return_to_hybrid(state: &mut AppState) {
    if let Some(signal) = state.terminal.set_mode(Mode::Hybrid) {
        process_signal(signal, state);
    }
}

/// Run a primary command chip: same as typing it at the prompt.
pub fn run_chip(state: &mut AppState, index: usize) {
    let name = state
        .terminal
        .registry()
        .primary_commands()
        .get(index)
        .map(|c| c.name.clone());
    if let Some(name) = name {
        run_submission(state, &name);
    }
}
