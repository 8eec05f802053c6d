use super::HistoryStore;
use crate::error::Result;
use crate::history::History;
use crate::model::Entry;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Vec<Entry>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(texts: &[&str]) -> Self {
        Self {
            entries: texts.iter().map(|t| Entry::new(t)).collect(),
            saves: 0,
        }
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HistoryStore for InMemoryStore {
    fn load(&self) -> Result<History> {
        Ok(History::from_entries(self.entries.clone()))
    }

    fn save(&mut self, history: &History) -> Result<()> {
        self.entries = history.entries().iter().cloned().collect();
        self.saves += 1;
        Ok(())
    }
}
