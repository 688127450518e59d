//! # Domain Entities
//!
//! Core data structures of the coin economy.
//!
//! ## Type Decisions
//!
//! - `amount: u64` - Amounts are magnitudes; direction is carried by
//!   [`TransactionKind`], not by sign. An unsigned type makes a negative
//!   credit unrepresentable rather than a runtime check.
//! - `timestamp: u64` - Milliseconds since epoch, used both for display and
//!   for sort order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a balance change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Coins credited (quiz completed, lesson finished, support grant).
    Earn,
    /// Coins debited (lesson unlock, power-up purchase).
    Spend,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Earn => write!(f, "earn"),
            TransactionKind::Spend => write!(f, "spend"),
        }
    }
}

/// Immutable record of one balance change.
///
/// ## Identity
///
/// `id` is the creation timestamp plus a random hex suffix. Collisions are
/// treated as negligible, not cryptographically impossible; the id exists for
/// display and support lookups, nothing authenticates against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinTransaction {
    /// Unique-enough identifier: `{timestamp}-{hex suffix}`.
    pub id: String,
    /// Direction of the change.
    pub kind: TransactionKind,
    /// Positive magnitude of the change.
    pub amount: u64,
    /// Human-readable label, e.g. "Quiz completed".
    pub reason: String,
    /// Milliseconds since epoch.
    pub timestamp: u64,
}

impl CoinTransaction {
    /// Create a transaction stamped with the given timestamp.
    pub fn new(
        kind: TransactionKind,
        amount: u64,
        reason: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        let suffix: u32 = rand::random::<u32>() & 0x00ff_ffff;
        Self {
            id: format!("{}-{:06x}", timestamp, suffix),
            kind,
            amount,
            reason: reason.into(),
            timestamp,
        }
    }
}

/// The persisted ledger state: one per user profile.
///
/// ## Invariants
///
/// - `balance` never goes below zero; [`LedgerRecord::debit`] rejects an
///   over-spend before any mutation.
/// - `transactions` holds at most the history limit, insertion order
///   preserved, oldest evicted first.
/// - `balance` is an independent running counter: evicting old transaction
///   records never changes it.
///
/// ## Serialization
///
/// Encoded as `{ "balance": <u64>, "transactions": [...] }`, the exact JSON
/// shape the host storage sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Current spendable coin count.
    pub balance: u64,
    /// Retained transactions, insertion order = chronological order.
    pub transactions: Vec<CoinTransaction>,
}

impl LedgerRecord {
    /// Create a fresh record with the configured starting balance.
    pub fn new(starting_balance: u64) -> Self {
        Self {
            balance: starting_balance,
            transactions: Vec::new(),
        }
    }

    /// Credit the transaction's amount and append it to the history.
    ///
    /// Saturates at `u64::MAX` rather than wrapping; a balance that large is
    /// already outside any meaningful reward scale.
    pub fn credit(&mut self, tx: CoinTransaction, history_limit: usize) {
        debug_assert_eq!(tx.kind, TransactionKind::Earn);
        self.balance = self.balance.saturating_add(tx.amount);
        self.push_bounded(tx, history_limit);
    }

    /// Debit the transaction's amount if funds suffice.
    ///
    /// Returns `false` and leaves the record untouched when the balance is
    /// insufficient. This is the expected denial path, not an error.
    pub fn debit(&mut self, tx: CoinTransaction, history_limit: usize) -> bool {
        debug_assert_eq!(tx.kind, TransactionKind::Spend);
        if self.balance < tx.amount {
            return false;
        }
        self.balance -= tx.amount;
        self.push_bounded(tx, history_limit);
        true
    }

    /// Retained transactions sorted most recent first.
    ///
    /// Independent of internal storage order, which stays chronological.
    pub fn recent_first(&self) -> Vec<CoinTransaction> {
        let mut transactions = self.transactions.clone();
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }

    fn push_bounded(&mut self, tx: CoinTransaction, history_limit: usize) {
        self.transactions.push(tx);
        if self.transactions.len() > history_limit {
            let excess = self.transactions.len() - history_limit;
            self.transactions.drain(..excess);
        }
    }
}
