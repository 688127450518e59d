use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the JSON document holding all entries.
const STORE_FILE: &str = "store.json";

/// Name of the advisory lock file.
const LOCK_FILE: &str = "LOCK";

/// Durable key-value store backed by a single JSON file.
///
/// The whole map is rewritten on every mutation via a temp file + rename, so
/// readers never observe a torn document. An exclusive advisory lock (`fs2`)
/// is held for the adapter's lifetime: a second process opening the same
/// directory gets [`StoreError::Unavailable`] instead of silently clobbering
/// writes. Concurrent owners of *different* directories still race at the
/// application level; the ledger accepts last-writer-wins there.
pub struct FileKeyValueStore {
    entries: HashMap<String, String>,
    path: PathBuf,
    lock: File,
}

impl FileKeyValueStore {
    /// Open (or create) the store in `data_dir`.
    ///
    /// Fails with [`StoreError::Unavailable`] when another process already
    /// holds the directory's lock.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;

        let lock = OpenOptions::new()
            .create(true)
            .write(true)
            .open(data_dir.join(LOCK_FILE))?;
        lock.try_lock_exclusive()
            .map_err(|_| StoreError::Unavailable)?;

        let path = data_dir.join(STORE_FILE);
        let entries = Self::load(&path);

        tracing::debug!(
            path = %path.display(),
            keys = entries.len(),
            "opened file store"
        );

        Ok(Self {
            entries,
            path,
            lock,
        })
    }

    /// Path of the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            // Absent file is the fresh-store case
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                // Corrupt document: treated as empty, replaced on next write
                tracing::warn!(path = %path.display(), %err, "store file unreadable");
                HashMap::new()
            }
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.entries).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(encoded.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl Drop for FileKeyValueStore {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.lock);
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        self.persist()
    }
}
