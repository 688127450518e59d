//! Ledger-Admin: coin ledger support tool
//!
//! One-shot CLI over a user's file-backed coin store: inspect the balance
//! and transaction history, grant test coins, and reset the ledger.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

use coin_ledger::{CoinLedgerApi, CoinLedgerService, FileKeyValueStore, LedgerConfig};

/// Ledger-Admin: coin ledger support tool
#[derive(Parser, Debug)]
#[command(name = "ledger-admin")]
#[command(about = "Inspect and maintain a user's coin ledger store")]
struct Args {
    /// Data directory holding the ledger store
    #[arg(short, long, default_value = ".ledger")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current balance (initializes the ledger if absent)
    Balance,
    /// Print the transaction history, most recent first
    History {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Credit coins (support grants, debug rewards)
    Earn {
        amount: u64,
        /// Label recorded on the transaction
        #[arg(default_value = "Test coins added")]
        reason: String,
    },
    /// Debit coins; exits non-zero when the balance is insufficient
    Spend {
        amount: u64,
        /// Label recorded on the transaction
        #[arg(default_value = "Admin spend")]
        reason: String,
    },
    /// Delete the persisted ledger entirely
    Reset,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let store = FileKeyValueStore::open(&args.data_dir)?;
    let mut ledger = CoinLedgerService::with_store(store, LedgerConfig::default());

    match args.command {
        Command::Balance => {
            println!("{}", ledger.balance());
        }
        Command::History { limit } => {
            let history = ledger.transaction_history();
            let shown = limit.unwrap_or(history.len());
            if history.is_empty() {
                println!("(no transactions)");
            }
            for tx in history.iter().take(shown) {
                println!(
                    "{:>13}  {:>5}  {:>8}  {}  [{}]",
                    tx.timestamp, tx.kind, tx.amount, tx.reason, tx.id
                );
            }
        }
        Command::Earn { amount, reason } => {
            ledger.earn(amount, &reason);
            println!("balance: {}", ledger.balance());
        }
        Command::Spend { amount, reason } => {
            if !ledger.spend(amount, &reason) {
                bail!(
                    "insufficient balance: {} available, {} requested",
                    ledger.balance(),
                    amount
                );
            }
            println!("balance: {}", ledger.balance());
        }
        Command::Reset => {
            ledger.reset();
            println!("ledger reset");
        }
    }

    Ok(())
}
