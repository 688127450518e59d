use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;

/// Capability-absent storage strategy.
///
/// For contexts with no working storage backend (restricted embeds,
/// headless test harnesses). Reads report an absent record, so the ledger
/// serves the configured defaults; writes report [`StoreError::Unavailable`]
/// and the service routes that through its error sink. The host keeps
/// functioning with an ephemeral, defaults-only ledger.
#[derive(Default)]
pub struct NullKeyValueStore;

impl NullKeyValueStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for NullKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
