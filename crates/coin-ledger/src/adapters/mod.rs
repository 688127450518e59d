//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod infra;
pub mod reporting;
pub mod storage;

pub use infra::{SteppingClock, SystemClock};
pub use reporting::{CollectingErrorSink, NullErrorSink, TracingErrorSink};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, MockKeyValueStore, NullKeyValueStore};
