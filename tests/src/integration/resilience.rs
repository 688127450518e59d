//! # Resilience
//!
//! Fail-open behavior under storage faults: the ledger keeps serving
//! defaults and reports through the sink instead of surfacing errors.

#[cfg(test)]
mod tests {
    use coin_ledger::{
        CoinLedgerApi, CoinLedgerService, CollectingErrorSink, LedgerConfig, LedgerDependencies,
        LedgerError, MockKeyValueStore, NullKeyValueStore, SteppingClock, StoreError,
    };

    fn make_ledger<KV: coin_ledger::KeyValueStore>(
        store: KV,
    ) -> (
        CoinLedgerService<KV, SteppingClock, CollectingErrorSink>,
        CollectingErrorSink,
    ) {
        let sink = CollectingErrorSink::new();
        let ledger = CoinLedgerService::new(
            LedgerDependencies {
                store,
                clock: SteppingClock::new(1_000),
                sink: sink.clone(),
            },
            LedgerConfig::default(),
        );
        (ledger, sink)
    }

    #[test]
    fn unreadable_store_still_yields_a_balance() {
        let mut store = MockKeyValueStore::new();
        store.fail_reads(true);
        let (mut ledger, sink) = make_ledger(store);

        // Never panics, never propagates: the default comes back
        assert_eq!(ledger.balance(), 1000);
        assert!(ledger.transaction_history().is_empty());

        assert!(sink
            .reports()
            .iter()
            .any(|e| matches!(e, LedgerError::ReadFailed(_))));
    }

    #[test]
    fn every_dropped_write_is_observable() {
        let mut store = MockKeyValueStore::new();
        store.fail_writes(true);
        let (mut ledger, sink) = make_ledger(store);

        ledger.earn(10, "one");
        ledger.earn(20, "two");
        assert!(ledger.spend(30, "three"));

        let dropped = sink
            .reports()
            .iter()
            .filter(|e| matches!(e, LedgerError::WriteFailed(_)))
            .count();
        assert_eq!(dropped, 3);

        // Nothing ever reached the store
        assert!(ledger.transaction_history().is_empty());
    }

    #[test]
    fn storage_less_context_runs_an_ephemeral_ledger() {
        let (mut ledger, sink) = make_ledger(NullKeyValueStore::new());

        assert_eq!(ledger.balance(), 1000);
        assert!(ledger.spend(400, "Unlock chapter"));
        // The spend could not persist; the next read re-initializes
        assert_eq!(ledger.balance(), 1000);

        assert!(sink
            .reports()
            .iter()
            .all(|e| matches!(
                e,
                LedgerError::WriteFailed(StoreError::Unavailable)
            )));
        assert!(!sink.is_empty());
    }

    #[test]
    fn stored_record_wins_over_defaults_once_readable() {
        const RECORD: &str = r#"{"balance":640,"transactions":[]}"#;

        // Same record behind faulty reads: the default is served
        let mut store = MockKeyValueStore::new();
        store.seed(coin_ledger::DEFAULT_STORAGE_KEY, RECORD);
        store.fail_reads(true);
        let (mut ledger, _sink) = make_ledger(store);
        assert_eq!(ledger.balance(), 1000);

        // Same record behind healthy reads: the stored value is served
        let mut store = MockKeyValueStore::new();
        store.seed(coin_ledger::DEFAULT_STORAGE_KEY, RECORD);
        let (mut ledger, sink) = make_ledger(store);
        assert_eq!(ledger.balance(), 640);
        assert!(sink.is_empty());
    }
}
