// crates/ports/src/events.rs
use std::{path::Path, time::Duration};

use ftp_monitor_domain::UploadTask;
use ftp_monitor_shared_kernel::{ConnectionError, Endpoint, MonitorError, UploadError};

/// Sink for everything the monitor reports while it runs.
///
/// Implementations decide how (and whether) to render each event.
pub trait MonitorEvents: Send + Sync {
    fn monitor_started(&self, root: &Path, endpoint: &Endpoint);
    fn baseline_established(&self, files: usize);
    fn scan_completed(&self, files: usize);
    fn no_changes(&self);
    fn changes_detected(&self, count: usize);

    fn connecting(&self, endpoint: &Endpoint, attempt: u32, max_attempts: u32);
    fn connection_failed(&self, attempt: u32, max_attempts: u32, error: &ConnectionError);
    fn retrying(&self, delay: Duration);
    fn connected(&self, endpoint: &Endpoint);

    fn uploaded(&self, task: &UploadTask);
    fn upload_failed(&self, task: &UploadTask, error: &UploadError);
    fn session_closed(&self, uploaded: usize, failed: usize, skipped: usize);
    fn close_failed(&self, error: &ConnectionError);

    fn cycle_failed(&self, error: &MonitorError);
    fn sleeping(&self, interval: Duration);
    fn monitor_stopped(&self);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEvents;

impl MonitorEvents for SilentEvents {
    fn monitor_started(&self, _root: &Path, _endpoint: &Endpoint) {}
    fn baseline_established(&self, _files: usize) {}
    fn scan_completed(&self, _files: usize) {}
    fn no_changes(&self) {}
    fn changes_detected(&self, _count: usize) {}
    fn connecting(&self, _endpoint: &Endpoint, _attempt: u32, _max_attempts: u32) {}
    fn connection_failed(&self, _attempt: u32, _max_attempts: u32, _error: &ConnectionError) {}
    fn retrying(&self, _delay: Duration) {}
    fn connected(&self, _endpoint: &Endpoint) {}
    fn uploaded(&self, _task: &UploadTask) {}
    fn upload_failed(&self, _task: &UploadTask, _error: &UploadError) {}
    fn session_closed(&self, _uploaded: usize, _failed: usize, _skipped: usize) {}
    fn close_failed(&self, _error: &ConnectionError) {}
    fn cycle_failed(&self, _error: &MonitorError) {}
    fn sleeping(&self, _interval: Duration) {}
    fn monitor_stopped(&self) {}
}
