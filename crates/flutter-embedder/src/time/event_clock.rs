use std::time::Instant;

/// Monotonic microsecond clock for input event timestamps.
///
/// Timestamps count from the clock's creation and never go backwards, even
/// when two events are stamped within the same microsecond.
#[derive(Debug, Clone)]
pub struct EventClock {
    origin: Instant,
    last_us: u64,
}

impl EventClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last_us: 0,
        }
    }

    /// Microseconds elapsed since the clock was created.
    pub fn now_us(&mut self) -> u64 {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        let us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.last_us = self.last_us.max(us);
        self.last_us
    }
}

impl Default for EventClock {
    fn default() -> Self {
        Self::new()
    }
}
