#![allow(dead_code)]
// tests/common/mocks.rs
//! In-memory stand-ins for the transfer and clock ports.

use std::{
    collections::BTreeMap,
    fs, io,
    path::Path,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use ftp_monitor_ports::{
    clock::{Sleeper, StopSignal},
    transfer::{TransferConnector, TransferSession},
};
use ftp_monitor_shared_kernel::{ConnectionError, Endpoint, UploadError};

// ============================================================================
// MemoryServer
// ============================================================================

/// Connector that "uploads" by copying file contents into a map keyed by
/// remote path. Later uploads of the same path overwrite earlier ones.
#[derive(Default)]
pub struct MemoryServer {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    uploads: Arc<Mutex<Vec<String>>>,
    refuse: AtomicUsize,
    sessions: AtomicUsize,
}

impl MemoryServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the next `count` connection attempts.
    pub fn refuse_next(&self, count: usize) {
        self.refuse.store(count, Ordering::SeqCst);
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn content(&self, remote: &str) -> Option<String> {
        self.files.lock().unwrap().get(remote).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn sessions(&self) -> usize {
        self.sessions.load(Ordering::SeqCst)
    }
}

impl TransferConnector for MemoryServer {
    fn connect(&self, endpoint: &Endpoint) -> Result<Box<dyn TransferSession>, ConnectionError> {
        let refused = self.refuse.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1)).is_ok();
        if refused {
            return Err(ConnectionError::Connect {
                endpoint: endpoint.to_string(),
                source: Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")),
            });
        }
        self.sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemorySession { files: Arc::clone(&self.files), uploads: Arc::clone(&self.uploads) }))
    }
}

struct MemorySession {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    uploads: Arc<Mutex<Vec<String>>>,
}

impl TransferSession for MemorySession {
    fn store(&mut self, local: &Path, remote: &str) -> Result<(), UploadError> {
        let bytes = fs::read(local).map_err(|source| UploadError::OpenLocal { path: local.to_path_buf(), source })?;
        self.files.lock().unwrap().insert(remote.to_string(), bytes);
        self.uploads.lock().unwrap().push(remote.to_string());
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        Ok(())
    }
}

// ============================================================================
// StepSleeper
// ============================================================================

type Step = Box<dyn Fn(usize) + Send + Sync>;

/// Returns immediately. Runs `on_wait` with the 1-based wait number, and
/// raises the stop signal once `stop_after` waits have been requested.
pub struct StepSleeper {
    waits: Mutex<Vec<Duration>>,
    stop: StopSignal,
    stop_after: usize,
    on_wait: Option<Step>,
}

impl StepSleeper {
    pub fn new(stop: StopSignal, stop_after: usize) -> Self {
        Self { waits: Mutex::default(), stop, stop_after, on_wait: None }
    }

    pub fn on_wait(mut self, step: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_wait = Some(Box::new(step));
        self
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Sleeper for StepSleeper {
    fn sleep(&self, duration: Duration) {
        let count = {
            let mut waits = self.waits.lock().unwrap();
            waits.push(duration);
            waits.len()
        };
        if let Some(step) = &self.on_wait {
            step(count);
        }
        if count >= self.stop_after {
            self.stop.request_stop();
        }
    }
}
