//! # Ports
//!
//! Hexagonal boundary of the ledger: the inbound API consumers drive, and
//! the outbound interfaces the host application implements.

pub mod inbound;
pub mod outbound;

pub use inbound::CoinLedgerApi;
pub use outbound::{Clock, ErrorSink, KeyValueStore};
