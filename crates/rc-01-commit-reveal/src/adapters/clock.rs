//! Manual time source for deadline tests.
//!
//! The slashing suites need to travel past the reveal deadline the
//! way chain tests advance block time; `ManualTimeSource` makes that
//! deterministic.

use crate::ports::TimeSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Time source advanced by hand.
pub struct ManualTimeSource {
    now: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
