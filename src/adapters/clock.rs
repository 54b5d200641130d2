//! Clock implementations for the timer queue.

use std::thread;
use std::time::{Duration, Instant};

use crate::ports::Clock;

/// Wall clock that sleeps the current thread while waiting.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn wait_until(&mut self, instant: Duration) {
        let now = self.now();
        if instant > now {
            thread::sleep(instant - now);
        }
    }
}

/// Virtual clock that jumps forward instead of sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait_until(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }
}
