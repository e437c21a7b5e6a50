//! LineEditor: the prompt's input buffer with autocomplete and history recall.

use std::collections::VecDeque;

use crate::autocomplete::{CompletionCycle, suggestions};
use crate::history::{HistoryCursor, MAX_HISTORY, Recall};
use crate::registry::CommandRegistry;

/// Input line state for the prompt.
///
/// Keeps its own newest-first recall list of submitted lines; clearing it
/// (Ctrl+L) does not touch the session history.
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    input: String,
    completion: Option<CompletionCycle>,
    recall: VecDeque<String>,
    cursor: HistoryCursor,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the selected suggestion, if a completion cycle is active.
    pub fn suggestion_index(&self) -> Option<usize> {
        self.completion.as_ref().map(CompletionCycle::index)
    }

    /// Index into the recall list, if navigating history.
    pub fn history_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Recall list, newest first.
    pub fn recall(&self) -> impl Iterator<Item = &str> {
        self.recall.iter().map(String::as_str)
    }

    /// Suggestions to display for the current state: the active cycle's
    /// candidates, or a fresh query for the typed text.
    pub fn suggestions<'a>(&'a self, registry: &'a CommandRegistry) -> Vec<&'a str> {
        match &self.completion {
            Some(cycle) => cycle.candidates().iter().map(String::as_str).collect(),
            None => suggestions(registry, &self.input),
        }
    }

    /// Insert a typed character. Ends any completion cycle.
    pub fn insert(&mut self, ch: char) {
        self.input.push(ch);
        self.completion = None;
    }

    /// Delete the last character. Ends any completion cycle.
    pub fn backspace(&mut self) {
        self.input.pop();
        self.completion = None;
    }

    /// Replace the input as if typed.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.completion = None;
    }

    /// Tab: start or advance the completion cycle. Returns whether the input
    /// changed.
    pub fn advance_suggestion(&mut self, registry: &CommandRegistry) -> bool {
        if let Some(cycle) = self.completion.as_mut() {
            self.input = cycle.advance().to_string();
            return true;
        }
        let candidates = suggestions(registry, &self.input)
            .into_iter()
            .map(str::to_string)
            .collect();
        let Some(cycle) = CompletionCycle::start(candidates) else {
            return false;
        };
        self.input = cycle.current().to_string();
        self.completion = Some(cycle);
        true
    }

    /// Pick a displayed suggestion directly.
    pub fn select_suggestion(&mut self, registry: &CommandRegistry, index: usize) -> bool {
        let candidates: Vec<String> = self
            .suggestions(registry)
            .into_iter()
            .map(str::to_string)
            .collect();
        let Some(cycle) = CompletionCycle::start_at(candidates, index) else {
            return false;
        };
        self.input = cycle.current().to_string();
        self.completion = Some(cycle);
        true
    }

    /// Shift+Tab: step the completion cycle backwards, starting from the
    /// last suggestion. Returns whether the input changed.
    pub fn retreat_suggestion(&mut self, registry: &CommandRegistry) -> bool {
        let count = self.suggestions(registry).len();
        if count == 0 {
            return false;
        }
        let index = match self.suggestion_index() {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.select_suggestion(registry, index)
    }

    /// Up arrow: recall an older line.
    pub fn history_back(&mut self) {
        let step = self.cursor.back(self.recall.len());
        self.apply(step);
    }

    /// Down arrow: recall a newer line, or blank the input past the newest.
    pub fn history_forward(&mut self) {
        let step = self.cursor.forward(self.recall.len());
        self.apply(step);
    }

    fn apply(&mut self, step: Recall) {
        match step {
            Recall::Entry(i) => {
                if let Some(line) = self.recall.get(i) {
                    self.input = line.clone();
                }
            },
            Recall::Blank => self.input.clear(),
            Recall::Unchanged => {},
        }
    }

    /// Ctrl+L: forget recalled lines and blank the input.
    pub fn clear_input(&mut self) {
        self.recall.clear();
        self.cursor.reset();
        self.input.clear();
        self.completion = None;
    }

    /// Enter: take the trimmed line for submission. Returns `None` (and
    /// leaves the input alone) if it is blank.
    pub fn take_submission(&mut self) -> Option<String> {
        let line = self.input.trim().to_string();
        if line.is_empty() {
            return None;
        }
        self.recall.push_front(line.clone());
        self.recall.truncate(MAX_HISTORY);
        self.input.clear();
        self.completion = None;
        self.cursor.reset();
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> CommandRegistry {
        CommandRegistry::builtin().unwrap()
    }

    fn submit(ed: &mut LineEditor, line: &str) {
        ed.set_input(line);
        ed.take_submission().unwrap();
    }

    #[test]
    fn typing_builds_input() {
        let mut ed = LineEditor::new();
        for ch in "help".chars() {
            ed.insert(ch);
        }
        assert_eq!(ed.input(), "help");
        ed.backspace();
        assert_eq!(ed.input(), "hel");
    }

    #[test]
    fn blank_submission_is_refused() {
        let mut ed = LineEditor::new();
        ed.set_input("   ");
        assert!(ed.take_submission().is_none());
        assert_eq!(ed.recall().count(), 0);
    }

    #[test]
    fn submission_is_trimmed_and_resets_state() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.set_input("e");
        ed.advance_suggestion(&reg);
        assert_eq!(ed.take_submission().as_deref(), Some("experience"));
        assert_eq!(ed.input(), "");
        assert!(ed.suggestion_index().is_none());
        assert!(ed.history_index().is_none());

        ed.set_input("  about  ");
        assert_eq!(ed.take_submission().as_deref(), Some("about"));
    }

    #[test]
    fn tab_cycles_through_typed_prefix_matches() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.insert('e');
        assert!(ed.advance_suggestion(&reg));
        assert_eq!(ed.input(), "experience");
        assert_eq!(ed.suggestion_index(), Some(0));
        assert!(ed.advance_suggestion(&reg));
        assert_eq!(ed.input(), "education");
        assert_eq!(ed.suggestion_index(), Some(1));
        assert!(ed.advance_suggestion(&reg));
        assert_eq!(ed.input(), "experience");
        assert_eq!(ed.suggestion_index(), Some(0));
    }

    #[test]
    fn tab_without_matches_does_nothing() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.set_input("zzz");
        assert!(!ed.advance_suggestion(&reg));
        assert_eq!(ed.input(), "zzz");
        assert!(ed.suggestion_index().is_none());
    }

    #[test]
    fn typing_resets_the_cycle() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.set_input("c");
        ed.advance_suggestion(&reg);
        assert_eq!(ed.input(), "certifications");
        ed.backspace();
        assert!(ed.suggestion_index().is_none());
        assert_eq!(ed.suggestions(&reg), ["certifications"]);
        ed.set_input("cl");
        assert_eq!(ed.suggestions(&reg), ["clear"]);
    }

    #[test]
    fn selecting_a_suggestion_sets_input() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.set_input("c");
        assert!(ed.select_suggestion(&reg, 1));
        assert_eq!(ed.input(), "contact");
        assert_eq!(ed.suggestion_index(), Some(1));
        ed.advance_suggestion(&reg);
        assert_eq!(ed.input(), "clear");
        assert!(!ed.select_suggestion(&reg, 9));
    }

    #[test]
    fn retreating_walks_the_cycle_backwards() {
        let reg = reg();
        let mut ed = LineEditor::new();
        ed.set_input("c");
        assert!(ed.retreat_suggestion(&reg));
        assert_eq!(ed.input(), "clear");
        assert!(ed.retreat_suggestion(&reg));
        assert_eq!(ed.input(), "contact");
        ed.advance_suggestion(&reg);
        assert_eq!(ed.input(), "clear");

        ed.set_input("zz");
        assert!(!ed.retreat_suggestion(&reg));
        assert_eq!(ed.input(), "zz");
    }

    #[test]
    fn history_back_and_forward() {
        let mut ed = LineEditor::new();
        submit(&mut ed, "help");
        submit(&mut ed, "about");

        ed.history_back();
        assert_eq!(ed.input(), "about");
        ed.history_back();
        assert_eq!(ed.input(), "help");
        ed.history_back();
        assert_eq!(ed.input(), "help");

        ed.history_forward();
        assert_eq!(ed.input(), "about");
        ed.history_forward();
        assert_eq!(ed.input(), "");
        assert!(ed.history_index().is_none());
    }

    #[test]
    fn forward_from_first_recall_blanks_input() {
        let mut ed = LineEditor::new();
        submit(&mut ed, "help");
        submit(&mut ed, "about");
        ed.history_back();
        ed.history_back();
        ed.history_back();
        assert_eq!(ed.input(), "help");
        ed.history_forward();
        ed.history_forward();
        assert_eq!(ed.input(), "");
    }

    #[test]
    fn navigation_without_history_keeps_input() {
        let mut ed = LineEditor::new();
        ed.set_input("draft");
        ed.history_back();
        ed.history_forward();
        assert_eq!(ed.input(), "draft");
    }

    #[test]
    fn typing_keeps_history_index() {
        let mut ed = LineEditor::new();
        submit(&mut ed, "help");
        ed.history_back();
        ed.insert('!');
        assert_eq!(ed.history_index(), Some(0));
    }

    #[test]
    fn clear_input_forgets_recall() {
        let mut ed = LineEditor::new();
        submit(&mut ed, "help");
        ed.set_input("ab");
        ed.clear_input();
        assert_eq!(ed.input(), "");
        assert_eq!(ed.recall().count(), 0);
        ed.history_back();
        assert_eq!(ed.input(), "");
    }

    #[test]
    fn recall_is_capped() {
        let mut ed = LineEditor::new();
        for i in 0..(MAX_HISTORY + 5) {
            submit(&mut ed, &format!("cmd{i}"));
        }
        assert_eq!(ed.recall().count(), MAX_HISTORY);
        assert_eq!(
            ed.recall().next(),
            Some(format!("cmd{}", MAX_HISTORY + 4).as_str())
        );
    }
}
