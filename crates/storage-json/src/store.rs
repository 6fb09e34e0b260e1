//! File-backed JSON document store.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use log::debug;

use crate::errors::StorageError;

/// A directory of documents, one file per key.
///
/// Replacement is all-or-nothing: new contents go to a temp file in the
/// same directory which is then renamed over the target, so a reader
/// observes either the old document or the new one, never a torn write.
/// A mutex serializes writers.
pub struct JsonStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(JsonStore {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the store's documents.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads a document's raw contents, or `None` when absent.
    pub fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// Replaces a document's contents in full.
    pub fn replace(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;

        let tmp = self.root.join(format!("{key}.json.tmp"));
        let mut file = fs::File::create(&tmp)?;
        file.write_all(contents.as_bytes())?;
        fs::rename(&tmp, self.document_path(key))?;

        debug!("Replaced store document '{}' ({} bytes)", key, contents.len());
        Ok(())
    }

    /// Removes a document. Removing an absent document is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;

        match fs::remove_file(self.document_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_document_reads_as_none() {
        let (_dir, store) = open_store();
        assert_eq!(store.read("nothing").unwrap(), None);
    }

    #[test]
    fn test_replace_then_read_round_trips() {
        let (_dir, store) = open_store();

        store.replace("doc", r#"{"a":1}"#).unwrap();
        assert_eq!(store.read("doc").unwrap().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_replace_overwrites_whole_document() {
        let (_dir, store) = open_store();

        store.replace("doc", "a long first value").unwrap();
        store.replace("doc", "short").unwrap();
        assert_eq!(store.read("doc").unwrap().unwrap(), "short");
    }

    #[test]
    fn test_replace_leaves_no_temp_file_behind() {
        let (dir, store) = open_store();

        store.replace("doc", "value").unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["doc.json".to_string()]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = open_store();

        store.replace("doc", "value").unwrap();
        store.remove("doc").unwrap();
        store.remove("doc").unwrap();
        assert_eq!(store.read("doc").unwrap(), None);
    }

    #[test]
    fn test_documents_are_isolated_by_key() {
        let (_dir, store) = open_store();

        store.replace("left", "1").unwrap();
        store.replace("right", "2").unwrap();
        store.remove("left").unwrap();
        assert_eq!(store.read("right").unwrap().unwrap(), "2");
    }
}
