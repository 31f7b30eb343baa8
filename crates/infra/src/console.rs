// crates/infra/src/console.rs
use std::{path::Path, time::Duration};

use colored::Colorize;
use ftp_monitor_domain::UploadTask;
use ftp_monitor_ports::events::MonitorEvents;
use ftp_monitor_shared_kernel::{ConnectionError, Endpoint, MonitorError, UploadError};

/// Renders monitor events through the `log` facade with terminal colours.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleEvents;

impl ConsoleEvents {
    pub fn new() -> Self {
        Self
    }
}

impl MonitorEvents for ConsoleEvents {
    fn monitor_started(&self, root: &Path, endpoint: &Endpoint) {
        log::info!("{}", format!("Monitoring {} -> {endpoint}", root.display()).cyan());
    }

    fn baseline_established(&self, files: usize) {
        log::info!("{}", format!("Baseline scan recorded {files} file(s); existing files will not be uploaded").magenta());
    }

    fn scan_completed(&self, files: usize) {
        log::debug!("scan found {files} qualifying file(s)");
    }

    fn no_changes(&self) {
        log::info!("{}", "No new or modified files".cyan());
    }

    fn changes_detected(&self, count: usize) {
        log::info!("{}", format!("{count} file(s) queued for upload").cyan());
    }

    fn connecting(&self, endpoint: &Endpoint, attempt: u32, max_attempts: u32) {
        log::debug!("connecting to {endpoint} (attempt {attempt}/{max_attempts})");
    }

    fn connection_failed(&self, attempt: u32, max_attempts: u32, error: &ConnectionError) {
        log::warn!("{}", format!("Connection attempt {attempt}/{max_attempts} failed: {error}").red());
    }

    fn retrying(&self, delay: Duration) {
        log::info!("{}", format!("Retrying in {}s", delay.as_secs()).yellow());
    }

    fn connected(&self, endpoint: &Endpoint) {
        log::info!("{}", format!("Connected to {endpoint}").blue());
    }

    fn uploaded(&self, task: &UploadTask) {
        log::info!("{}", format!("Uploaded {}", task.remote_path()).green());
    }

    fn upload_failed(&self, task: &UploadTask, error: &UploadError) {
        log::error!("{}", format!("Upload of {} failed: {error}", task.local_path().display()).red());
    }

    fn session_closed(&self, uploaded: usize, failed: usize, skipped: usize) {
        let summary = format!("Session closed: {uploaded} uploaded, {failed} failed");
        if skipped > 0 {
            log::info!("{}", format!("{summary}, {skipped} skipped").cyan());
        } else {
            log::info!("{}", summary.cyan());
        }
    }

    fn close_failed(&self, error: &ConnectionError) {
        log::warn!("{}", format!("{error}").red());
    }

    fn cycle_failed(&self, error: &MonitorError) {
        log::error!("{}", format!("Cycle failed: {error}").red());
    }

    fn sleeping(&self, interval: Duration) {
        log::debug!("{}", format!("Next scan in {}s", interval.as_secs()).yellow());
    }

    fn monitor_stopped(&self) {
        log::info!("{}", "Monitor stopped".cyan());
    }
}
