// crates/ports/src/clock.rs
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

/// Timed waits: between cycles, between connection attempts and between uploads.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

/// Shared flag asking the monitor to stop at the next safe point.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
