//! Prefix autocomplete over primary command names.

use crate::registry::CommandRegistry;

/// Maximum number of suggestions offered at once.
pub const MAX_SUGGESTIONS: usize = 5;

/// Command names starting with `partial` (lower-cased), excluding an exact
/// match, in registry order, capped at [`MAX_SUGGESTIONS`].
pub fn suggestions<'a>(registry: &'a CommandRegistry, partial: &str) -> Vec<&'a str> {
    let partial = partial.to_lowercase();
    registry
        .commands()
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| name.starts_with(&partial) && *name != partial)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// A tab-completion cycle over a fixed candidate list.
///
/// The candidates are captured from the text the user typed, so advancing
/// keeps rotating through them even after the input holds a full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCycle {
    candidates: Vec<String>,
    index: usize,
}

impl CompletionCycle {
    /// Start a cycle at the first candidate. `None` if there is nothing to offer.
    pub fn start(candidates: Vec<String>) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }
        Some(Self {
            candidates,
            index: 0,
        })
    }

    /// Start a cycle at `index`. `None` if `index` is out of range.
    pub fn start_at(candidates: Vec<String>, index: usize) -> Option<Self> {
        if index >= candidates.len() {
            return None;
        }
        Some(Self { candidates, index })
    }

    pub fn current(&self) -> &str {
        &self.candidates[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Rotate to the next candidate, wrapping around.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.candidates.len();
        self.current()
    }
}
