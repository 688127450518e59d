//! # Domain Layer
//!
//! Pure ledger logic with no I/O: entities, value objects, and errors.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{CoinTransaction, LedgerRecord, TransactionKind};
pub use errors::{LedgerError, StoreError};
pub use value_objects::LedgerConfig;
