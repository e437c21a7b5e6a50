//! Command interpreter for the résumé terminal.
//!
//! The interpreter is table-driven. A [`CommandRegistry`] holds the static
//! command definitions and a name/alias dictionary; [`Terminal::submit`]
//! resolves a line, runs the matching session transition, appends the
//! presentation [`Payload`] to the result log, and returns the [`Signal`]s
//! the surrounding shell acts on. [`LineEditor`] owns the prompt's input
//! buffer, tab completion, and history recall.

pub mod autocomplete;
mod dispatch;
mod editor;
pub mod history;
pub mod output;
pub mod payload;
pub mod registry;
pub mod sections;
mod session;

/// Prefix suggestions over primary command names.
pub use autocomplete::{CompletionCycle, MAX_SUGGESTIONS, suggestions};
/// The interpreter and what a submission reports back.
pub use dispatch::{Signal, Submission, Terminal};
/// Prompt input state (completion cycle + history recall).
pub use editor::LineEditor;
/// Bounded session logs and the recall cursor.
pub use history::{
    CommandExecution, History, HistoryCursor, MAX_HISTORY, MAX_RESULTS, ResultLog, TerminalResult,
};
/// Structured command output.
pub use payload::{Block, Payload, PayloadKind};
/// Command table and resolution.
pub use registry::{
    CommandCategory, CommandDefinition, CommandRegistry, PRIMARY_COMMANDS, SCROLL_START,
    builtin_commands,
};
/// Scrollable résumé layout.
pub use sections::{ScrollLayout, SectionDescriptor};
/// Session state and time source.
pub use session::{Clock, Mode, SystemClock, TerminalSession};
