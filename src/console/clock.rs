//! Monotonic clocks for gameplay timing windows.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Elapsed game time since the clock was created.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Manually advanced clock. Clones share the same time, so a console double
/// and the encounter context can observe one timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
