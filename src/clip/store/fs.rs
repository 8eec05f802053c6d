use super::{HistoryDocument, HistoryStore};
use crate::error::{ClipError, Result};
use crate::history::History;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILENAME: &str = "data.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ClipError::Io)?;
        }
        Ok(())
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<History> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!(path = %data_file.display(), "no history file yet");
            return Ok(History::new());
        }

        let content = fs::read_to_string(&data_file).map_err(ClipError::Io)?;
        if content.trim().is_empty() {
            return Ok(History::new());
        }

        let doc: HistoryDocument =
            serde_json::from_str(&content).map_err(ClipError::Serialization)?;
        debug!(entries = doc.items.len(), "loaded history");
        Ok(doc.into_history())
    }

    fn save(&mut self, history: &History) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string(&HistoryDocument::from_history(history))
            .map_err(ClipError::Serialization)?;

        // Write next to the target and rename, so a crash never leaves half a file.
        let data_file = self.data_file();
        let tmp_file = self.root.join(format!(".data-{}.tmp", std::process::id()));
        fs::write(&tmp_file, content).map_err(ClipError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(ClipError::Io)?;

        debug!(entries = history.len(), path = %data_file.display(), "saved history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("clip"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_file_loads_empty() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.data_file(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.data_file(), "{not json").unwrap();
        assert!(matches!(store.load(), Err(ClipError::Serialization(_))));
    }

    #[test]
    fn save_creates_directory_and_round_trips() {
        let (_dir, mut store) = setup();
        let mut history = History::new();
        history.add("one");
        history.add("two\nlines");
        store.save(&history).unwrap();

        let loaded = store.load().unwrap();
        let texts: Vec<_> = loaded.entries().iter().map(|e| e.data.as_str()).collect();
        assert_eq!(texts, vec!["one", "two\nlines"]);
        assert!(loaded.index_is_consistent());
    }

    #[test]
    fn save_overwrites_and_leaves_no_temp_files() {
        let (_dir, mut store) = setup();
        let mut history = History::new();
        history.add("old");
        store.save(&history).unwrap();
        history.clear();
        history.add("new");
        store.save(&history).unwrap();

        assert_eq!(store.load().unwrap().entries()[0].data, "new");
        for entry in fs::read_dir(store.root()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover temp file: {}", name);
        }
    }

    #[test]
    fn reads_documents_with_short_keys() {
        let (_dir, store) = setup();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(
            store.data_file(),
            r#"{"i":[{"d":"older","h":"x"},{"d":"newer","h":"y"}]}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.newest().unwrap().data, "newer");
        assert_eq!(loaded.find("older"), Some(0));
    }
}
