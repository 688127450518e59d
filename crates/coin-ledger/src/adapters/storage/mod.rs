//! # Storage Adapters
//!
//! Key-value store implementations: a durable file-backed store for real
//! hosts, an in-memory store for tests, a null store for storage-less
//! contexts, and a fault-injecting mock for failure-path tests.

mod file;
mod memory;
mod mock;
mod null;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
pub use mock::MockKeyValueStore;
pub use null::NullKeyValueStore;
