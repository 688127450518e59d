//! # Persistence
//!
//! Durability across service instances over one file-backed store: the
//! record a session writes is the record the next session reads.

#[cfg(test)]
mod tests {
    use coin_ledger::{
        CoinLedgerApi, CoinLedgerService, FileKeyValueStore, LedgerConfig, TransactionKind,
        DEFAULT_STORAGE_KEY,
    };
    use std::fs;
    use std::path::Path;

    fn open_ledger(
        dir: &Path,
    ) -> CoinLedgerService<
        FileKeyValueStore,
        coin_ledger::SystemClock,
        coin_ledger::TracingErrorSink,
    > {
        let store = FileKeyValueStore::open(dir).unwrap();
        CoinLedgerService::with_store(store, LedgerConfig::default())
    }

    #[test]
    fn first_read_writes_the_record_to_disk() {
        let dir = tempfile::tempdir().unwrap();

        let mut ledger = open_ledger(dir.path());
        assert_eq!(ledger.balance(), 1000);
        drop(ledger);

        let raw = fs::read_to_string(dir.path().join("store.json")).unwrap();
        assert!(raw.contains(DEFAULT_STORAGE_KEY));
        assert!(raw.contains("\\\"balance\\\":1000"));
    }

    #[test]
    fn balance_and_history_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut ledger = open_ledger(dir.path());
            ledger.earn(150, "Quiz completed");
            assert!(ledger.spend(300, "Unlock lesson"));
        }

        let mut ledger = open_ledger(dir.path());
        assert_eq!(ledger.balance(), 850);

        let history = ledger.transaction_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, TransactionKind::Spend);
        assert_eq!(history[1].kind, TransactionKind::Earn);
    }

    #[test]
    fn reset_in_one_session_is_visible_in_the_next() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut ledger = open_ledger(dir.path());
            ledger.earn(999, "jackpot");
            ledger.reset();
        }

        let mut ledger = open_ledger(dir.path());
        assert!(ledger.transaction_history().is_empty());
        assert_eq!(ledger.balance(), 1000);
    }

    #[test]
    fn corrupt_store_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("store.json"), "<<garbage>>").unwrap();

        let mut ledger = open_ledger(dir.path());
        assert_eq!(ledger.balance(), 1000);

        // The first write replaces the damaged file
        ledger.earn(10, "recovery");
        drop(ledger);

        let mut ledger = open_ledger(dir.path());
        assert_eq!(ledger.balance(), 1010);
    }
}
