//! JSON-file implementation of [`KeyValueStore`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use identia_core::error::IdentiaResult;
use identia_core::storage::KeyValueStore;
use tracing::warn;

use crate::error::StoreError;

/// Store backed by a single JSON file holding a string map — the
/// local-storage analog for desktop runs. The whole map is rewritten
/// on every mutation; with one session slot that is a handful of
/// bytes.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing contents.
    ///
    /// A missing file yields an empty store. A malformed file is
    /// treated as empty too (warn only) — persisted state is never
    /// allowed to fail startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding malformed store file");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> IdentiaResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> IdentiaResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush().map_err(Into::into)
    }

    fn delete(&mut self, key: &str) -> IdentiaResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush().map_err(Into::into)
        } else {
            Ok(())
        }
    }
}
