//! # Domain Errors
//!
//! Two-level taxonomy: [`StoreError`] is what a storage adapter can fail
//! with, [`LedgerError`] is what the ledger reports about an operation.
//!
//! ## Design Principles
//!
//! - No operation returns an error to the caller; every failure is routed
//!   through the `ErrorSink` hook and the operation degrades to a safe
//!   default.
//! - Insufficient balance is NOT an error - it is the normal boolean-false
//!   result of `spend`.

use thiserror::Error;

/// Failures of the underlying key-value storage primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No working storage backend exists in this context.
    #[error("storage backend unavailable")]
    Unavailable,

    /// Read or write failed at the I/O layer.
    #[error("storage I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Failures the ledger reports through its error sink.
///
/// These never propagate to the calling UI flow; they exist so a host
/// application can log or alert on degraded persistence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Reading the persisted record failed; the ledger fell open to defaults.
    #[error("ledger read failed: {0}")]
    ReadFailed(StoreError),

    /// Persisting a mutation failed; the mutation was dropped.
    #[error("ledger write failed: {0}")]
    WriteFailed(StoreError),

    /// Removing the persisted record failed.
    #[error("ledger reset failed: {0}")]
    ResetFailed(StoreError),

    /// The persisted record was not valid JSON; treated as absent and
    /// overwritten on the next successful write.
    #[error("corrupt ledger record: {message}")]
    CorruptRecord { message: String },

    /// A caller passed a zero amount; the operation performed no mutation.
    #[error("rejected {operation} with zero amount")]
    InvalidAmount { operation: &'static str },
}
