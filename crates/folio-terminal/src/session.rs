//! Session state: execution history, result log, and display mode.
//!
//! All three slices change together inside one transition method; nothing
//! outside this module mutates them.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::history::{CommandExecution, History, ResultLog, TerminalResult};
use crate::payload::Payload;

/// Layout mode of the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Terminal plus the scrollable résumé layout.
    #[default]
    Hybrid,
    /// Terminal only; the résumé layout is hidden.
    Terminal,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid",
            Self::Terminal => "terminal",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Hybrid => Self::Terminal,
            Self::Terminal => Self::Hybrid,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of timestamps for history and results.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Mutable state of one interpreter session.
#[derive(Debug, Clone, Default)]
pub struct TerminalSession {
    history: History,
    results: ResultLog,
    mode: Mode,
    next_result: u64,
}

impl TerminalSession {
    /// Empty history, empty results, hybrid mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn results(&self) -> &ResultLog {
        &self.results
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Submit transition: record `command` in history and, if a payload was
    /// produced, append it to the result log. Returns the new result's id.
    pub fn record(&mut self, command: &str, payload: Option<Payload>, now: u64) -> Option<String> {
        self.history.push(CommandExecution {
            command: command.to_string(),
            timestamp: now,
        });
        let payload = payload?;
        let id = format!("result-{}", self.next_result);
        self.next_result += 1;
        self.results.push(TerminalResult {
            id: id.clone(),
            command: command.to_string(),
            rendered_at: now,
            payload,
        });
        Some(id)
    }

    /// Clear transition: empties results, leaves history alone.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Toggle-mode transition. Returns the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Set-mode transition. Returns whether the mode changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }
}
