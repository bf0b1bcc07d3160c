//! Key-value stores
//!
//! The budget state is persisted as a single string under a fixed key. The
//! store only needs three operations, so the manager is generic over
//! [`KeyValueStore`] and tests run against [`MemoryStore`].

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};

use super::file_io::{read_text, remove_file_if_exists, write_text_atomic};

/// A string-keyed, string-valued persistent store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> BudgetResult<()>;

    /// Remove `key`; removing a missing key succeeds
    fn remove(&mut self, key: &str) -> BudgetResult<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> BudgetResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the store files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> BudgetResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BudgetResult<Option<String>> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "reading store entry");
        read_text(path)
    }

    fn set(&mut self, key: &str, value: String) -> BudgetResult<()> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), bytes = value.len(), "writing store entry");
        write_text_atomic(path, &value)
    }

    fn remove(&mut self, key: &str) -> BudgetResult<()> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "removing store entry");
        remove_file_if_exists(path)
    }
}

/// Keys become file names, so only a safe character set is allowed
fn validate_key(key: &str) -> BudgetResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(BudgetError::Config(format!(
            "Invalid store key '{}': use letters, digits, '-' or '_'",
            key
        )))
    }
}
