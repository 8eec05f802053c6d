//! # History Store
//!
//! The clipboard history is a sequence of [`Entry`] values ordered by recency:
//! oldest at position 0, newest at the end. No two entries share a content
//! hash.
//!
//! ## The dedup index
//!
//! Alongside the sequence, `History` keeps a map from content hash to absolute
//! position. The map is a cache, never a source of truth:
//!
//! - after an append, the new hash is inserted pointing at the last position;
//! - after any removal, the whole map is rebuilt with [`History::reindex`],
//!   since every position at or after the removal point has shifted.
//!
//! At every point between public calls, `index[e.hash]` equals the position of
//! `e` in the sequence. Histories are small (tens to hundreds of entries), so
//! the O(n) rebuild is cheap; the map turns "have I seen this before" into a
//! lookup instead of a scan.
//!
//! The sequence is a `VecDeque`, so dropping the oldest or the newest entry
//! does not shift the rest of the storage.
//!
//! Positions here are always absolute. Translating the user's "0 is newest"
//! numbering is the job of [`crate::index`].

use crate::error::{ClipError, Result};
use crate::model::{content_hash, Entry};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<Entry>,
    index: HashMap<String, usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from persisted entries, oldest first.
    ///
    /// Hashes are recomputed from the text. If the same content appears more
    /// than once, only the newest occurrence is kept.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let total = entries.len();
        let rebuilt: Vec<Entry> = entries.iter().map(|e| Entry::new(&e.data)).collect();

        let mut newest_at: HashMap<&str, usize> = HashMap::new();
        for (pos, entry) in rebuilt.iter().enumerate() {
            newest_at.insert(entry.hash.as_str(), pos);
        }
        let kept: Vec<Entry> = rebuilt
            .iter()
            .enumerate()
            .filter(|(pos, e)| newest_at.get(e.hash.as_str()) == Some(pos))
            .map(|(_, e)| e.clone())
            .collect();

        if kept.len() != total {
            warn!(
                dropped = total - kept.len(),
                "duplicate entries found in stored history"
            );
        }

        let mut history = Self {
            entries: kept.into(),
            index: HashMap::new(),
        };
        history.reindex();
        history
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &VecDeque<Entry> {
        &self.entries
    }

    pub fn newest(&self) -> Option<&Entry> {
        self.entries.back()
    }

    pub fn position_of(&self, hash: &str) -> Option<usize> {
        self.index.get(hash).copied()
    }

    /// Absolute position of the entry whose content matches `text` once trimmed.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.position_of(&content_hash(text))
    }

    /// Adds `text` as the newest entry.
    ///
    /// Content already present elsewhere in the history is moved to the newest
    /// position; content that is already newest leaves the history untouched.
    pub fn add(&mut self, text: &str) {
        let entry = Entry::new(text);
        let newest = self.entries.len().checked_sub(1);

        match self.position_of(&entry.hash) {
            Some(pos) if Some(pos) == newest => {
                debug!("content is already the newest entry");
                return;
            }
            Some(pos) => {
                debug!(position = pos, "promoting existing entry");
                // Always in bounds: the index only holds live positions.
                let _ = self.remove(pos);
            }
            None => {}
        }

        self.index.insert(entry.hash.clone(), self.entries.len());
        self.entries.push_back(entry);
    }

    pub fn get(&self, position: usize) -> Result<&Entry> {
        self.entries
            .get(position)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Removes and returns the entry at `position`, then rebuilds the index.
    pub fn remove(&mut self, position: usize) -> Result<Entry> {
        let len = self.entries.len();
        if position >= len {
            return Err(self.out_of_bounds(position));
        }

        // Both ends are O(1); only a middle removal moves entries.
        let removed = match position {
            0 => self.entries.pop_front(),
            p if p + 1 == len => self.entries.pop_back(),
            p => self.entries.remove(p),
        }
        .ok_or_else(|| self.out_of_bounds(position))?;

        if self.entries.is_empty() {
            self.index.clear();
        } else {
            // Positions after the removal point are stale.
            self.reindex();
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Rebuilds the hash → position map from the sequence.
    pub fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.hash.clone(), pos))
            .collect();
    }

    fn out_of_bounds(&self, position: usize) -> ClipError {
        ClipError::IndexOutOfBounds {
            index: i64::try_from(position).unwrap_or(i64::MAX),
            len: self.entries.len(),
        }
    }

    /// True when the index equals what [`History::reindex`] would produce.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn index_is_consistent(&self) -> bool {
        self.index.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(pos, e)| self.index.get(&e.hash) == Some(&pos))
    }
}
