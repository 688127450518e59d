//! # Coin Ledger Service
//!
//! The application service implementing [`CoinLedgerApi`].
//!
//! ## Architecture
//!
//! This service:
//! 1. Uses dependency injection for storage, time, and error reporting
//! 2. Keeps no cached state - every operation is a fresh read-modify-write
//!    against the store, so a dropped write leaves nothing stale in memory
//! 3. Persists each mutation as one full-record write
//!
//! ## Failure Semantics
//!
//! Reads fail open to the configured defaults; failed writes are reported
//! through the [`ErrorSink`] and dropped. Callers never see an error.


use crate::adapters::{InMemoryKeyValueStore, SystemClock, TracingErrorSink};
use crate::domain::entities::{CoinTransaction, LedgerRecord, TransactionKind};
use crate::domain::errors::{LedgerError, StoreError};
use crate::domain::value_objects::LedgerConfig;
use crate::ports::inbound::CoinLedgerApi;
use crate::ports::outbound::{Clock, ErrorSink, KeyValueStore};

/// Dependencies for [`CoinLedgerService`].
pub struct LedgerDependencies<KV, CL, ES> {
    pub store: KV,
    pub clock: CL,
    pub sink: ES,
}

/// Outcome of reading the persisted record.
enum Loaded {
    /// A valid record exists.
    Record(LedgerRecord),
    /// No record exists yet (fresh store).
    Absent,
    /// The store failed or the record was corrupt; already reported.
    Failed,
}

/// The Coin Ledger Service.
///
/// Generic over its three outbound ports so hosts inject real storage and
/// tests inject fakes. All operations are synchronous; the host environment
/// serializes calls, so there is no interior locking.
pub struct CoinLedgerService<KV, CL, ES>
where
    KV: KeyValueStore,
    CL: Clock,
    ES: ErrorSink,
{
    /// Key-value store for persistence.
    pub(crate) store: KV,
    /// Time source for transaction timestamps.
    pub(crate) clock: CL,
    /// The observable failure hook.
    pub(crate) sink: ES,
    /// Service configuration.
    pub(crate) config: LedgerConfig,
}

impl<KV, CL, ES> CoinLedgerService<KV, CL, ES>
where
    KV: KeyValueStore,
    CL: Clock,
    ES: ErrorSink,
{
    /// Create a new service with the given dependencies.
    pub fn new(deps: LedgerDependencies<KV, CL, ES>, config: LedgerConfig) -> Self {
        Self {
            store: deps.store,
            clock: deps.clock,
            sink: deps.sink,
            config,
        }
    }

    fn load(&self) -> Loaded {
        let raw = match self.store.get(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Loaded::Absent,
            Err(err) => {
                self.sink.report(&LedgerError::ReadFailed(err));
                return Loaded::Failed;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Loaded::Record(record),
            Err(err) => {
                // Treated as absent; replaced by the next successful write
                self.sink.report(&LedgerError::CorruptRecord {
                    message: err.to_string(),
                });
                Loaded::Failed
            }
        }
    }

    /// Working copy for a mutation. A fresh or unreadable store yields a
    /// default record; the mutation's own write is what persists it.
    fn working_record(&self) -> LedgerRecord {
        match self.load() {
            Loaded::Record(record) => record,
            Loaded::Absent | Loaded::Failed => LedgerRecord::new(self.config.starting_balance),
        }
    }

    /// Persist the full record as one write. Returns `false` (reported) on
    /// failure; the attempted mutation is simply dropped.
    fn persist(&mut self, record: &LedgerRecord) -> bool {
        let encoded = match serde_json::to_string(record) {
            Ok(encoded) => encoded,
            Err(err) => {
                self.sink.report(&LedgerError::WriteFailed(StoreError::Io {
                    message: err.to_string(),
                }));
                return false;
            }
        };
        match self.store.set(&self.config.storage_key, &encoded) {
            Ok(()) => true,
            Err(err) => {
                self.sink.report(&LedgerError::WriteFailed(err));
                false
            }
        }
    }
}

impl<KV> CoinLedgerService<KV, SystemClock, TracingErrorSink>
where
    KV: KeyValueStore,
{
    /// Create a service over `store` with the system clock and tracing sink.
    pub fn with_store(store: KV, config: LedgerConfig) -> Self {
        Self::new(
            LedgerDependencies {
                store,
                clock: SystemClock,
                sink: TracingErrorSink,
            },
            config,
        )
    }
}

impl CoinLedgerService<InMemoryKeyValueStore, SystemClock, TracingErrorSink> {
    /// Create a service over a fresh in-memory store.
    pub fn new_in_memory(config: LedgerConfig) -> Self {
        Self::with_store(InMemoryKeyValueStore::new(), config)
    }
}

impl<KV, CL, ES> CoinLedgerApi for CoinLedgerService<KV, CL, ES>
where
    KV: KeyValueStore,
    CL: Clock,
    ES: ErrorSink,
{
    fn balance(&mut self) -> u64 {
        match self.load() {
            Loaded::Record(record) => record.balance,
            Loaded::Absent => {
                // Lazy creation: persist the fresh record before returning
                let record = LedgerRecord::new(self.config.starting_balance);
                if self.persist(&record) {
                    tracing::debug!(balance = record.balance, "ledger initialized");
                }
                record.balance
            }
            // Fail open without touching whatever is stored
            Loaded::Failed => self.config.starting_balance,
        }
    }

    fn earn(&mut self, amount: u64, reason: &str) {
        if amount == 0 {
            self.sink
                .report(&LedgerError::InvalidAmount { operation: "earn" });
            return;
        }

        let mut record = self.working_record();
        let tx = CoinTransaction::new(
            TransactionKind::Earn,
            amount,
            reason,
            self.clock.now_millis(),
        );
        record.credit(tx, self.config.history_limit);

        if self.persist(&record) {
            tracing::debug!(amount, reason, balance = record.balance, "coins earned");
        }
    }

    fn spend(&mut self, amount: u64, reason: &str) -> bool {
        if amount == 0 {
            self.sink
                .report(&LedgerError::InvalidAmount { operation: "spend" });
            return false;
        }

        let mut record = self.working_record();
        let tx = CoinTransaction::new(
            TransactionKind::Spend,
            amount,
            reason,
            self.clock.now_millis(),
        );
        if !record.debit(tx, self.config.history_limit) {
            tracing::debug!(amount, balance = record.balance, "spend denied");
            return false;
        }

        if self.persist(&record) {
            tracing::debug!(amount, reason, balance = record.balance, "coins spent");
        }
        true
    }

    fn transaction_history(&self) -> Vec<CoinTransaction> {
        match self.load() {
            Loaded::Record(record) => record.recent_first(),
            Loaded::Absent | Loaded::Failed => Vec::new(),
        }
    }

    fn reset(&mut self) {
        if let Err(err) = self.store.remove(&self.config.storage_key) {
            self.sink.report(&LedgerError::ResetFailed(err));
            return;
        }
        tracing::debug!("ledger reset");
    }
}
