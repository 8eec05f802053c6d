//! # Operations
//!
//! Each module here implements one operation against a [`History`]. They take
//! plain Rust values and return a [`CmdResult`]; printing is left to the caller.

use crate::error::Result;
use crate::history::History;
use tracing::debug;

pub mod add;
pub mod delete;
pub mod list;
pub mod paste;

/// The single thing one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Help,
    Version,
    Add { text: String, silent: bool },
    Paste { index: i64 },
    Delete { indices: Vec<i64> },
    DeleteAll,
    List { start: i64, end: i64 },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    /// Written verbatim, without a trailing newline.
    pub text: Option<String>,
    /// Written one per line.
    pub lines: Vec<String>,
    pub show_help: bool,
}

impl CmdResult {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn help() -> Self {
        Self {
            show_help: true,
            ..Self::default()
        }
    }
}

pub fn execute(history: &mut History, operation: Operation) -> Result<CmdResult> {
    debug!(?operation, entries = history.len(), "executing");
    match operation {
        Operation::Help => Ok(CmdResult::help()),
        Operation::Version => {
            let version = crate::version().to_string();
            Ok(CmdResult::default().with_lines(vec![version]))
        }
        Operation::Add { text, silent } => add::run(history, &text, silent),
        Operation::Paste { index } => paste::run(history, index),
        Operation::Delete { indices } => delete::run(history, &indices),
        Operation::DeleteAll => Ok(delete::all(history)),
        Operation::List { start, end } => list::run(history, start, end),
    }
}
