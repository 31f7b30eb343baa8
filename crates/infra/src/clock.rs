use std::{
    thread,
    time::{Duration, Instant},
};

use ftp_monitor_ports::clock::{Sleeper, StopSignal};

const DEFAULT_SLICE: Duration = Duration::from_millis(200);

/// Blocks the calling thread, waking early once a stop is requested.
#[derive(Debug, Clone)]
pub struct StopAwareSleeper {
    stop: StopSignal,
    slice: Duration,
}

impl StopAwareSleeper {
    pub fn new(stop: StopSignal) -> Self {
        Self { stop, slice: DEFAULT_SLICE }
    }

    /// How often the stop flag is polled while waiting.
    #[must_use]
    pub fn with_slice(mut self, slice: Duration) -> Self {
        self.slice = slice.max(Duration::from_millis(1));
        self
    }
}

impl Sleeper for StopAwareSleeper {
    fn sleep(&self, duration: Duration) {
        // unrepresentable deadline: wait until stopped
        let deadline = Instant::now().checked_add(duration);
        while !self.stop.is_stopped() {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => self.slice,
            };
            if remaining.is_zero() {
                break;
            }
            thread::sleep(remaining.min(self.slice));
        }
    }
}
