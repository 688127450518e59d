//! # Value Objects
//!
//! Immutable configuration for the ledger.

/// Starting balance granted when a ledger is first created.
pub const DEFAULT_STARTING_BALANCE: u64 = 1000;

/// Maximum retained transactions; older entries are evicted first.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Namespaced storage key the record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "ledger:coins:v1";

/// Configuration for the coin ledger.
///
/// All values have production defaults; tests and the admin tool override
/// them through the builder methods.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Balance a freshly initialized ledger starts with.
    pub starting_balance: u64,

    /// History bound. Eviction never changes the balance, which is an
    /// independent running counter.
    pub history_limit: usize,

    /// Key the JSON record lives under in the key-value store.
    pub storage_key: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            history_limit: DEFAULT_HISTORY_LIMIT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl LedgerConfig {
    /// Create a configuration with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting balance for fresh ledgers.
    pub fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Set the transaction history bound.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the storage key the record is persisted under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
