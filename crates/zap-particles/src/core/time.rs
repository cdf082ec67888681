use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time, in milliseconds.
/// Only differences between readings matter; the epoch is up to the implementation.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by `SystemTime` (milliseconds since the Unix epoch).
/// Not available on `wasm32-unknown-unknown`; the web bridge brings its own clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Caller-driven clock. Clones share the same time, so a test can keep a
/// handle and advance the clock owned by a particle system.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Minimum-interval gate for simulation ticks.
/// Caps update frequency no matter how often the host calls in.
#[derive(Debug, Clone)]
pub struct TickThrottle {
    /// Minimum time between accepted ticks.
    min_interval_ms: f64,
    /// Time of the last accepted tick (or of construction).
    last_tick_ms: f64,
}

impl TickThrottle {
    pub fn new(min_interval_ms: f64, now_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_tick_ms: now_ms,
        }
    }

    /// Accept the tick if at least the minimum interval has passed.
    /// Rejected ticks leave the last tick time untouched.
    pub fn try_advance(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tick_ms < self.min_interval_ms {
            return false;
        }
        self.last_tick_ms = now_ms;
        true
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    pub fn min_interval_ms(&self) -> f64 {
        self.min_interval_ms
    }
}
