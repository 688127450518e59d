//! # Infrastructure Adapters

mod time;

pub use time::{SteppingClock, SystemClock};
