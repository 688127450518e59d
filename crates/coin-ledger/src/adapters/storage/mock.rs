use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;
use std::collections::HashMap;

/// Controllable key-value store for failure-path tests.
///
/// Behaves like [`InMemoryKeyValueStore`](super::InMemoryKeyValueStore)
/// until a failure mode is switched on; then the selected operations return
/// I/O errors while the underlying map stays untouched.
#[derive(Default)]
pub struct MockKeyValueStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `get` calls fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make subsequent `set`/`remove` calls fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Seed an entry directly, bypassing failure modes.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io {
                message: "injected read failure".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io {
                message: "injected write failure".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io {
                message: "injected write failure".to_string(),
            });
        }
        self.entries.remove(key);
        Ok(())
    }
}
