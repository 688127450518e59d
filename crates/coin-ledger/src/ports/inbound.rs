//! # Inbound Port (Driving API)
//!
//! The operations UI flows call on the ledger. There is no push/subscribe
//! mechanism: balance displays re-read after known mutation events.

use crate::domain::entities::CoinTransaction;

/// The coin ledger API.
///
/// All operations are synchronous and infallible from the caller's point of
/// view: storage faults degrade to defaults and are reported through the
/// injected error sink, never thrown.
pub trait CoinLedgerApi {
    /// Current spendable balance.
    ///
    /// Lazily initializes the ledger on first read: if no record exists, one
    /// is created with the configured starting balance and persisted before
    /// returning. On a read or parse failure this returns the starting
    /// balance without touching the stored value.
    fn balance(&mut self) -> u64;

    /// Credit `amount` coins with a human-readable reason.
    ///
    /// A zero amount performs no mutation and is reported through the error
    /// sink. Appends an `earn` transaction, evicts history beyond the bound,
    /// and persists the full record in a single write. A failed write drops
    /// the mutation (reported, never thrown); the next read reloads whatever
    /// the store last accepted.
    fn earn(&mut self, amount: u64, reason: &str);

    /// Debit `amount` coins if the balance suffices.
    ///
    /// Returns `false` with no mutation when `amount` is zero or exceeds the
    /// balance - the caller owns user-facing denial messaging. Otherwise
    /// debits, appends a `spend` transaction, applies the same eviction and
    /// persistence rules as [`CoinLedgerApi::earn`], and returns `true`.
    fn spend(&mut self, amount: u64, reason: &str) -> bool;

    /// Retained transactions, most recent first.
    ///
    /// Read-only: returns an empty list when no record exists and never
    /// initializes one.
    fn transaction_history(&self) -> Vec<CoinTransaction>;

    /// Delete the persisted record entirely.
    ///
    /// Idempotent; the next [`CoinLedgerApi::balance`] call re-initializes
    /// from defaults. Support and testing surface only.
    fn reset(&mut self);
}
