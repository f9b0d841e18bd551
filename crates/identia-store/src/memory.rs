//! In-memory implementation of [`KeyValueStore`].

use std::collections::HashMap;

use identia_core::error::IdentiaResult;
use identia_core::storage::KeyValueStore;

/// HashMap-backed store. State lives and dies with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> IdentiaResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> IdentiaResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> IdentiaResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
