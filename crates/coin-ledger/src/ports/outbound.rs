//! # Outbound Ports (Driven SPI)
//!
//! Dependencies the host application injects into the ledger service.

use crate::domain::errors::{LedgerError, StoreError};

/// The synchronous key-value storage primitive the ledger persists through.
///
/// Values are opaque strings (the ledger stores one JSON document). The
/// backend is origin-scoped and may be unavailable; the service treats every
/// failure as recoverable.
///
/// Production: [`FileKeyValueStore`](crate::adapters::FileKeyValueStore)
/// Testing: [`InMemoryKeyValueStore`](crate::adapters::InMemoryKeyValueStore)
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Abstract time source (for testability).
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since epoch.
    fn now_millis(&self) -> u64;
}

/// The single observable failure hook.
///
/// The ledger never throws storage faults at UI flows; it routes them here
/// so the host can log or alert on degraded persistence.
pub trait ErrorSink: Send + Sync {
    /// Observe a degraded-operation report.
    fn report(&self, error: &LedgerError);
}
