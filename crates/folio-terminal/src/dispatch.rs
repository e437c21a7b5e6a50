//! Command dispatch: resolve a submission, run its transition, and report
//! the signals the shell must act on.
//!
//! Signals are returned after the session state has been updated, in the
//! order they must be handled. For one submission the shell sees at most one
//! `ScrollToSection`, always before the single `CommandResolved`.

use folio_types::content::Resume;

use crate::output;
use crate::payload::Payload;
use crate::registry::{CommandDefinition, CommandRegistry, names, normalize};
use crate::session::{Clock, Mode, SystemClock, TerminalSession};

/// Notification for the surrounding shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The layout mode changed.
    ModeChanged(Mode),
    /// Move focus to a résumé section.
    ScrollToSection(String),
    /// A submission finished. `definition` is `None` for unknown input.
    CommandResolved {
        command: String,
        definition: Option<CommandDefinition>,
    },
}

/// Outcome of one non-empty submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Id of the result appended to the log, if any.
    pub result_id: Option<String>,
    pub signals: Vec<Signal>,
}

/// Per-command dispatch behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Clear,
    Toggle,
    Download,
    Help,
    /// Render from content; `scroll` renders nothing.
    Render,
}

impl Action {
    fn for_command(def: &CommandDefinition) -> Self {
        match def.name.as_str() {
            names::CLEAR => Self::Clear,
            names::TOGGLE => Self::Toggle,
            names::DOWNLOAD => Self::Download,
            names::HELP => Self::Help,
            _ => Self::Render,
        }
    }
}

/// The interpreter: registry, content, and session state.
pub struct Terminal {
    registry: CommandRegistry,
    content: Resume,
    session: TerminalSession,
    clock: Box<dyn Clock>,
}

impl Terminal {
    pub fn new(registry: CommandRegistry, content: Resume) -> Self {
        Self::with_clock(registry, content, Box::new(SystemClock))
    }

    pub fn with_clock(registry: CommandRegistry, content: Resume, clock: Box<dyn Clock>) -> Self {
        Self {
            registry,
            content,
            session: TerminalSession::new(),
            clock,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn content(&self) -> &Resume {
        &self.content
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Resolve without side effects.
    pub fn resolve(&self, input: &str) -> Option<&CommandDefinition> {
        self.registry.resolve(input)
    }

    /// Submit a command line. Empty (after trimming) input is ignored and
    /// returns `None`; everything else is recorded in history.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        let command = input.trim();
        if command.is_empty() {
            return None;
        }
        let now = self.clock.now_millis();

        let Some(def) = self.registry.resolve(command).cloned() else {
            let token = normalize(command);
            log::debug!("Unresolved command '{token}'");
            let result_id =
                self.session
                    .record(command, Some(output::not_found_payload(&token)), now);
            return Some(Submission {
                result_id,
                signals: vec![Signal::CommandResolved {
                    command: command.to_string(),
                    definition: None,
                }],
            });
        };

        log::debug!("Resolved '{command}' to '{}'", def.name);
        let mut signals = Vec::new();
        let payload = match Action::for_command(&def) {
            Action::Clear => {
                self.session.clear();
                None
            },
            Action::Toggle => {
                let mode = self.session.toggle_mode();
                signals.push(Signal::ModeChanged(mode));
                Some(output::toggle_payload(mode))
            },
            Action::Download => Some(output::download_payload()),
            Action::Help => Some(output::help_payload(&self.registry)),
            Action::Render => self.render(&def),
        };
        let result_id = self.session.record(command, payload, now);

        if let Some(section) = &def.related_section {
            signals.push(Signal::ScrollToSection(section.clone()));
        }
        signals.push(Signal::CommandResolved {
            command: command.to_string(),
            definition: Some(def),
        });
        Some(Submission { result_id, signals })
    }

    fn render(&self, def: &CommandDefinition) -> Option<Payload> {
        if def.name == names::SCROLL {
            return None;
        }
        Some(
            output::section_payload(&def.name, &self.content)
                .unwrap_or_else(output::acknowledged_payload),
        )
    }

    /// Set the mode directly, e.g. from a "return to hybrid view" control.
    /// Returns `ModeChanged` only when the mode actually changed.
    pub fn set_mode(&mut self, mode: Mode) -> Option<Signal> {
        if self.session.set_mode(mode) {
            log::debug!("Mode set to {mode}");
            Some(Signal::ModeChanged(mode))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::history::{MAX_HISTORY, MAX_RESULTS};
    use crate::registry::{CommandCategory, builtin_commands};
    use folio_types::validate::embedded_resume;

    struct StepClock(Rc<Cell<u64>>);
    impl Clock for StepClock {
        fn now_millis(&self) -> u64 {
            let t = self.0.get();
            self.0.set(t + 1);
            t
        }
    }

    fn terminal() -> Terminal {
        Terminal::with_clock(
            CommandRegistry::builtin().unwrap(),
            embedded_resume().unwrap(),
            Box::new(StepClock(Rc::new(Cell::new(1_000)))),
        )
    }

    fn resolved_names(sub: &Submission) -> Vec<Option<String>> {
        sub.signals
            .iter()
            .filter_map(|s| match s {
                Signal::CommandResolved { definition, .. } => {
                    Some(definition.as_ref().map(|d| d.name.clone()))
                },
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut t = terminal();
        assert!(t.submit("").is_none());
        assert!(t.submit("   ").is_none());
        assert!(t.session().history().is_empty());
    }

    #[test]
    fn unknown_command_is_recorded_with_one_error() {
        let mut t = terminal();
        let sub = t.submit("foo").unwrap();
        assert_eq!(t.session().history().get(0).unwrap().command, "foo");
        assert_eq!(t.session().results().len(), 1);
        let r = t.session().results().last().unwrap();
        assert!(r.payload.is_error());
        assert!(r.payload.text().contains("foo"));
        assert_eq!(sub.result_id.as_deref(), Some(r.id.as_str()));
        assert_eq!(resolved_names(&sub), [None]);
    }

    #[test]
    fn error_names_the_normalized_token() {
        let mut t = terminal();
        t.submit("  FooBar ").unwrap();
        let r = t.session().results().last().unwrap();
        assert!(r.payload.text().contains("Command not found: foobar."));
        assert_eq!(t.session().history().get(0).unwrap().command, "FooBar");
    }

    #[test]
    fn clear_empties_results_and_records_itself() {
        let mut t = terminal();
        t.submit("about");
        t.submit("skills");
        let before = t.session().history().len();
        let sub = t.submit("clear").unwrap();
        assert!(t.session().results().is_empty());
        assert_eq!(t.session().history().len(), before + 1);
        assert_eq!(t.session().history().get(0).unwrap().command, "clear");
        assert!(sub.result_id.is_none());
        assert_eq!(resolved_names(&sub), [Some("clear".to_string())]);
    }

    #[test]
    fn toggle_twice_round_trips_with_confirmations() {
        let mut t = terminal();
        let first = t.submit("toggle").unwrap();
        assert_eq!(t.mode(), Mode::Terminal);
        assert_eq!(first.signals[0], Signal::ModeChanged(Mode::Terminal));
        assert!(
            t.session()
                .results()
                .last()
                .unwrap()
                .payload
                .text()
                .contains("terminal")
        );

        let second = t.submit("toggle").unwrap();
        assert_eq!(t.mode(), Mode::Hybrid);
        assert_eq!(second.signals[0], Signal::ModeChanged(Mode::Hybrid));
        assert!(
            t.session()
                .results()
                .last()
                .unwrap()
                .payload
                .text()
                .contains("hybrid")
        );
        assert_eq!(t.session().results().len(), 2);
    }

    #[test]
    fn section_command_scrolls_then_resolves() {
        let mut t = terminal();
        let sub = t.submit("Experience").unwrap();
        assert_eq!(sub.signals.len(), 2);
        assert_eq!(
            sub.signals[0],
            Signal::ScrollToSection("experience".to_string())
        );
        assert!(matches!(
            &sub.signals[1],
            Signal::CommandResolved { command, definition: Some(d) }
                if command == "Experience" && d.name == "experience"
        ));
        assert!(sub.result_id.is_some());
    }

    #[test]
    fn scroll_signals_once_and_renders_nothing() {
        let mut t = terminal();
        let sub = t.submit("view").unwrap();
        let scrolls = sub
            .signals
            .iter()
            .filter(|s| matches!(s, Signal::ScrollToSection(_)))
            .count();
        assert_eq!(scrolls, 1);
        assert_eq!(
            sub.signals[0],
            Signal::ScrollToSection("scroll-start".to_string())
        );
        assert_eq!(resolved_names(&sub), [Some("scroll".to_string())]);
        assert!(t.session().results().is_empty());
        assert_eq!(t.session().history().len(), 1);
    }

    #[test]
    fn download_aliases_give_instructions() {
        let mut t = terminal();
        for input in ["download", "resume", "download resume"] {
            let sub = t.submit(input).unwrap();
            assert!(
                t.session()
                    .results()
                    .last()
                    .unwrap()
                    .payload
                    .text()
                    .contains("PDF")
            );
            assert_eq!(sub.signals.len(), 1);
        }
    }

    #[test]
    fn help_alias_lists_commands() {
        let mut t = terminal();
        t.submit("?");
        let text = t.session().results().last().unwrap().payload.text();
        assert!(text.contains("certifications"));
    }

    #[test]
    fn unrendered_command_is_acknowledged() {
        let mut cmds = builtin_commands();
        cmds.push(CommandDefinition::new(
            "blog",
            "Read the blog.",
            CommandCategory::Utility,
        ));
        let mut t = Terminal::new(
            CommandRegistry::new(cmds).unwrap(),
            embedded_resume().unwrap(),
        );
        t.submit("blog");
        assert_eq!(
            t.session().results().last().unwrap().payload.text(),
            output::ACKNOWLEDGED
        );
    }

    #[test]
    fn history_caps_at_fifty_newest_first() {
        let mut t = terminal();
        for i in 0..=MAX_HISTORY {
            t.submit(&format!("cmd{i}"));
        }
        let h = t.session().history();
        assert_eq!(h.len(), MAX_HISTORY);
        assert_eq!(h.get(0).unwrap().command, format!("cmd{MAX_HISTORY}"));
    }

    #[test]
    fn results_cap_at_twenty_newest_last() {
        let mut t = terminal();
        for i in 0..=MAX_RESULTS {
            t.submit(&format!("cmd{i}"));
        }
        let r = t.session().results();
        assert_eq!(r.len(), MAX_RESULTS);
        assert_eq!(r.last().unwrap().command, format!("cmd{MAX_RESULTS}"));
        assert_eq!(r.iter().next().unwrap().command, "cmd1");
    }

    #[test]
    fn timestamps_come_from_the_clock() {
        let mut t = terminal();
        t.submit("about");
        t.submit("skills");
        let h = t.session().history();
        assert!(h.get(0).unwrap().timestamp > h.get(1).unwrap().timestamp);
    }

    #[test]
    fn set_mode_signals_only_on_change() {
        let mut t = terminal();
        assert!(t.set_mode(Mode::Hybrid).is_none());
        assert_eq!(
            t.set_mode(Mode::Terminal),
            Some(Signal::ModeChanged(Mode::Terminal))
        );
        assert!(t.session().history().is_empty());
    }
}
