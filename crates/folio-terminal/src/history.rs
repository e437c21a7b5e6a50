//! Bounded session logs and history navigation.
//!
//! The two logs are ordered in opposite directions: [`History`] is
//! newest-first (shell up-arrow recall), [`ResultLog`] is oldest-first (a
//! scrolling output log). Both evict on push once full.

use std::collections::VecDeque;

use crate::payload::Payload;

/// Maximum number of command executions retained.
pub const MAX_HISTORY: usize = 50;

/// Maximum number of rendered results retained.
pub const MAX_RESULTS: usize = 20;

/// One submitted command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExecution {
    pub command: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// One entry in the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalResult {
    /// Unique within a session (`result-<n>`).
    pub id: String,
    pub command: String,
    /// Milliseconds since the Unix epoch.
    pub rendered_at: u64,
    pub payload: Payload,
}

/// Newest-first execution history, capped at [`MAX_HISTORY`].
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<CommandExecution>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an execution, evicting the oldest beyond the cap.
    pub fn push(&mut self, execution: CommandExecution) {
        self.entries.push_front(execution);
        self.entries.truncate(MAX_HISTORY);
    }

    /// Entry `index` positions back from the newest.
    pub fn get(&self, index: usize) -> Option<&CommandExecution> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandExecution> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Oldest-first result log, capped at [`MAX_RESULTS`].
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    entries: VecDeque<TerminalResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, evicting the oldest beyond the cap.
    pub fn push(&mut self, result: TerminalResult) {
        self.entries.push_back(result);
        while self.entries.len() > MAX_RESULTS {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn last(&self) -> Option<&TerminalResult> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerminalResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a navigation step did to the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with the entry at this index.
    Entry(usize),
    /// Blank the input.
    Blank,
    /// Nothing to navigate.
    Unchanged,
}

/// Cursor into a newest-first history list.
///
/// `back` walks towards older entries and clamps at the oldest; `forward`
/// walks towards newer entries and leaves the history (blank input) when it
/// passes the newest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    index: Option<usize>,
}

impl HistoryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    /// Step to an older entry in a history of `len` entries.
    pub fn back(&mut self, len: usize) -> Recall {
        if len == 0 {
            return Recall::Unchanged;
        }
        let next = match self.index {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        };
        self.index = Some(next);
        Recall::Entry(next)
    }

    /// Step to a newer entry in a history of `len` entries.
    pub fn forward(&mut self, len: usize) -> Recall {
        if len == 0 {
            return Recall::Unchanged;
        }
        match self.index {
            None | Some(0) => {
                self.index = None;
                Recall::Blank
            },
            Some(i) => {
                self.index = Some(i - 1);
                Recall::Entry(i - 1)
            },
        }
    }
}
