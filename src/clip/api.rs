//! # API Facade
//!
//! [`ClipApi`] is the context object for one invocation. It owns the storage
//! backend and the history loaded from it, and every operation goes through it:
//!
//! ```text
//! ClipApi::open(store)        load, once
//!   .run(&invocation, pipe)   interpret + execute, at most one mutation
//!   .save()                   persist, once
//! ```
//!
//! Load and save are explicit calls, never side effects of an operation. The
//! facade does no printing; it hands back a [`CmdResult`] for the UI to render.
//!
//! `ClipApi<S: HistoryStore>` is generic over the backend:
//! - Production: `ClipApi<FileStore>`
//! - Testing: `ClipApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::history::History;
use crate::interpret::interpret;
use crate::store::HistoryStore;

pub use crate::commands::{CmdResult, Operation};
pub use crate::interpret::{Invocation, PipeInput, StdinPipe};

pub struct ClipApi<S: HistoryStore> {
    store: S,
    history: History,
}

impl<S: HistoryStore> ClipApi<S> {
    /// Loads the history from `store`.
    pub fn open(store: S) -> Result<Self> {
        let history = store.load()?;
        Ok(Self { store, history })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decides what `invocation` asks for, reading `pipe` only if needed.
    pub fn interpret(
        &self,
        invocation: &Invocation,
        pipe: &mut dyn PipeInput,
    ) -> Result<Operation> {
        interpret(invocation, &self.history, pipe)
    }

    pub fn execute(&mut self, operation: Operation) -> Result<CmdResult> {
        commands::execute(&mut self.history, operation)
    }

    pub fn run(&mut self, invocation: &Invocation, pipe: &mut dyn PipeInput) -> Result<CmdResult> {
        let operation = self.interpret(invocation, pipe)?;
        self.execute(operation)
    }

    pub fn add(&mut self, text: &str, silent: bool) -> Result<CmdResult> {
        commands::add::run(&mut self.history, text, silent)
    }

    pub fn paste(&mut self, index: i64) -> Result<CmdResult> {
        commands::paste::run(&mut self.history, index)
    }

    pub fn delete(&mut self, indices: &[i64]) -> Result<CmdResult> {
        commands::delete::run(&mut self.history, indices)
    }

    pub fn delete_all(&mut self) -> CmdResult {
        commands::delete::all(&mut self.history)
    }

    pub fn list(&self, start: i64, end: i64) -> Result<CmdResult> {
        commands::list::run(&self.history, start, end)
    }

    /// Writes the whole history back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.history)
    }
}
