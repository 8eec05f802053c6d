//! # Storage Layer
//!
//! The history is persisted as one document, read in full when the program
//! starts and rewritten in full when it exits. The [`HistoryStore`] trait is
//! that whole contract: there is no partial or incremental persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single `data.json` in the data
//!   directory.
//! - [`memory::InMemoryStore`]: Keeps the last saved history in memory, for
//!   tests.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── data.json      # {"i":[{"d":"<text>","h":"<digest>"}, ...]}, oldest first
//! └── config.json    # optional, see crate::config
//! ```
//!
//! Nothing coordinates concurrent `clip` processes; the last one to save wins.

use crate::error::Result;
use crate::history::History;
use crate::model::Entry;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub trait HistoryStore {
    /// Loads the full history. A store that was never written yields an empty one.
    fn load(&self) -> Result<History>;

    /// Replaces the stored history with `history`.
    fn save(&mut self, history: &History) -> Result<()>;
}

/// On-disk shape of the history.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HistoryDocument {
    #[serde(rename = "i", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Entry>,
}

impl HistoryDocument {
    pub fn from_history(history: &History) -> Self {
        Self {
            items: history.entries().iter().cloned().collect(),
        }
    }

    pub fn into_history(self) -> History {
        History::from_entries(self.items)
    }
}
