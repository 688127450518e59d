//! # Coin Ledger
//!
//! The coin economy subsystem of the learning platform: a durable record of a
//! user's spendable coin balance plus a bounded audit trail of changes, kept
//! entirely on the client and surviving restarts of the host application.
//!
//! ## Architecture
//!
//! The persisted record is owned by whichever host storage the application
//! injects; the ledger itself is a synchronous read-modify-write service:
//!
//! ```text
//! [Reward flows] ──earn──→ ┐
//!                          ├──→ [CoinLedgerService] ──single write──→ [KeyValueStore]
//! [Purchase flows] ─spend─→ ┘            │
//!                                        └──storage faults──→ [ErrorSink]
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Non-negative balance | An over-spend is rejected before mutation |
//! | 2 | Bounded history | At most 50 transactions retained, oldest evicted first |
//! | 3 | Independent counter | Eviction never changes the balance |
//! | 4 | Single write | Each mutation persists the full record in one write |
//!
//! ## Failure Philosophy
//!
//! The ledger is a soft reward system, not a ledger of record. No operation
//! returns an error to the caller: reads fail open to the configured default,
//! failed writes are reported through the [`ErrorSink`] hook and dropped. The
//! host UI must never crash over a storage glitch.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure domain logic (entities, value objects, errors)
//! - `ports/` - Port traits (inbound API, outbound SPI)
//! - `adapters/` - Storage, clock, and reporting implementations
//! - `service/` - Application service implementing the API
//!
//! ## Usage
//!
//! ```ignore
//! use coin_ledger::{CoinLedgerApi, CoinLedgerService, LedgerConfig};
//!
//! let mut ledger = CoinLedgerService::new_in_memory(LedgerConfig::default());
//!
//! assert_eq!(ledger.balance(), 1000);
//! ledger.earn(50, "Quiz completed");
//! if ledger.spend(200, "Unlock lesson") {
//!     // purchase granted
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use domain::entities::{CoinTransaction, LedgerRecord, TransactionKind};
pub use domain::errors::{LedgerError, StoreError};
pub use domain::value_objects::{
    LedgerConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_STARTING_BALANCE, DEFAULT_STORAGE_KEY,
};
pub use ports::inbound::CoinLedgerApi;
pub use ports::outbound::{Clock, ErrorSink, KeyValueStore};

// Re-export adapters
pub use adapters::{
    CollectingErrorSink, FileKeyValueStore, InMemoryKeyValueStore, MockKeyValueStore,
    NullErrorSink, NullKeyValueStore, SteppingClock, SystemClock, TracingErrorSink,
};

pub use service::{CoinLedgerService, LedgerDependencies};
