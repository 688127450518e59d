//! # Error Reporting Adapters
//!
//! Implementations of the single observable failure hook. The ledger never
//! throws storage faults at callers; it routes them through one of these.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::ErrorSink;
use std::sync::{Arc, Mutex};

/// Routes reports through `tracing` at WARN level.
#[derive(Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, error: &LedgerError) {
        tracing::warn!(%error, "coin ledger degraded");
    }
}

/// Discards all reports.
#[derive(Default)]
pub struct NullErrorSink;

impl ErrorSink for NullErrorSink {
    fn report(&self, _error: &LedgerError) {}
}

/// Records reports for assertions in tests.
///
/// Clones share the same underlying buffer, so a test can keep a handle
/// while the service owns the sink.
#[derive(Clone, Default)]
pub struct CollectingErrorSink {
    reports: Arc<Mutex<Vec<LedgerError>>>,
}

impl CollectingErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn reports(&self) -> Vec<LedgerError> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.reports.lock().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ErrorSink for CollectingErrorSink {
    fn report(&self, error: &LedgerError) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(error.clone());
        }
    }
}
