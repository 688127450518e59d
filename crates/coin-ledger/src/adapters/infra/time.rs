use crate::ports::outbound::Clock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default clock using system time.
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Deterministic clock for tests: each reading advances by one millisecond,
/// so consecutive transactions get strictly increasing timestamps.
pub struct SteppingClock {
    now: AtomicU64,
}

impl SteppingClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Jump the clock to an absolute time.
    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::Relaxed);
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> u64 {
        self.now.fetch_add(1, Ordering::Relaxed)
    }
}
