//! Time provider abstraction so throttle logic stays testable

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::time::Duration;
use std::time::Instant;

/// Abstraction over the monotonic clock used by the scan throttle
pub trait TimeProvider: Send + Sync {
    /// Get the current monotonic time (for measuring intervals)
    fn now(&self) -> Instant;
}

/// Production time provider using the actual system clock
#[derive(Debug, Default, Clone)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock time provider for deterministic throttle testing
#[derive(Clone)]
#[cfg(test)]
pub struct MockTimeProvider {
    current_instant: Arc<Mutex<Instant>>,
}

#[cfg(test)]
impl MockTimeProvider {
    /// Create a new mock time provider anchored at the current instant
    pub fn new() -> Self {
        Self {
            current_instant: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advance the mock clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut instant = self.current_instant.lock().unwrap();
        *instant += duration;
    }
}

#[cfg(test)]
impl TimeProvider for MockTimeProvider {
    fn now(&self) -> Instant {
        *self.current_instant.lock().unwrap()
    }
}
