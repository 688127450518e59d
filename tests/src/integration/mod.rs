//! # Integration Tests

pub mod lifecycle;
pub mod persistence;
pub mod resilience;
