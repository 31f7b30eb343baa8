// crates/usecase/src/monitor.rs
use ftp_monitor_domain::{BaselinePolicy, MonitorConfig, Snapshot, UploadQueue, detect_changes};
use ftp_monitor_ports::{
    clock::{Sleeper, StopSignal},
    events::MonitorEvents,
    filesystem::FileSystem,
    transfer::TransferConnector,
};
use ftp_monitor_shared_kernel::MonitorError;

use crate::{dto::CycleReport, scanner::DirectoryScanner, uploader::Uploader};

/// Adapters the monitor loop talks to.
#[derive(Clone, Copy)]
pub struct MonitorPorts<'a> {
    pub filesystem: &'a dyn FileSystem,
    pub connector: &'a dyn TransferConnector,
    pub sleeper: &'a dyn Sleeper,
    pub events: &'a dyn MonitorEvents,
}

/// Owns everything one monitoring run needs: configuration, the baseline
/// snapshot and the queue of pending uploads.
///
/// The first successful scan only records a baseline. Every later scan is
/// compared against it and whatever is new or newer is uploaded in a single
/// session.
pub struct MonitorLoop<'a> {
    config: MonitorConfig,
    baseline: Option<Snapshot>,
    queue: UploadQueue,
    scanner: DirectoryScanner<'a>,
    uploader: Uploader<'a>,
    sleeper: &'a dyn Sleeper,
    events: &'a dyn MonitorEvents,
    stop: StopSignal,
}

impl<'a> MonitorLoop<'a> {
    pub fn new(config: MonitorConfig, ports: MonitorPorts<'a>, stop: StopSignal) -> Self {
        Self {
            config,
            baseline: None,
            queue: UploadQueue::new(),
            scanner: DirectoryScanner::new(ports.filesystem),
            uploader: Uploader::new(ports.connector, ports.sleeper, ports.events).with_stop_signal(stop.clone()),
            sleeper: ports.sleeper,
            events: ports.events,
            stop,
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// `None` until the first scan succeeds.
    pub fn baseline(&self) -> Option<&Snapshot> {
        self.baseline.as_ref()
    }

    pub fn queue(&self) -> &UploadQueue {
        &self.queue
    }

    /// Scans the tree and adopts the result as the baseline, replacing any
    /// existing one. Nothing is uploaded.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Scan`] when the root cannot be walked; the
    /// previous baseline (if any) is left untouched.
    pub fn establish_baseline(&mut self) -> Result<usize, MonitorError> {
        let snapshot = self.scanner.scan(self.config.root(), &self.config.rules)?;
        let files = snapshot.len();
        self.baseline = Some(snapshot);
        self.events.baseline_established(files);
        Ok(files)
    }

    /// Runs one iteration: baseline on the first call, change detection and
    /// upload afterwards.
    ///
    /// # Errors
    ///
    /// A scan failure leaves the baseline and queue as they were. A
    /// connection failure discards the queued tasks; whether they are
    /// detected again depends on the configured [`BaselinePolicy`].
    pub fn run_cycle(&mut self) -> Result<CycleReport, MonitorError> {
        let Some(baseline) = self.baseline.as_mut() else {
            let files = self.establish_baseline()?;
            return Ok(CycleReport::Baseline { files });
        };

        let mut current = self.scanner.scan(self.config.root(), &self.config.rules)?;
        let scanned = current.len();
        self.events.scan_completed(scanned);

        let changes = detect_changes(baseline, &current);
        let pending: Snapshot = changes.iter().cloned().collect();
        match self.config.baseline_policy {
            BaselinePolicy::CommitOnScan => baseline.merge(current),
            BaselinePolicy::CommitOnDelivery => {
                for record in &changes {
                    current.remove(record.path.as_str());
                }
                baseline.merge(current);
            }
        }

        self.queue.extend(changes.iter().map(|record| self.config.task_for(record)));
        if self.queue.is_empty() {
            self.events.no_changes();
            return Ok(CycleReport::NoChanges { scanned });
        }
        self.events.changes_detected(self.queue.len());

        let mut session =
            self.uploader.run_session(&self.config.endpoint, &self.config.schedule, self.queue.drain());

        if self.config.baseline_policy == BaselinePolicy::CommitOnDelivery {
            for task in &session.uploaded {
                if let Some(modified) = pending.get(task.relative_path().as_str()) {
                    baseline.insert(task.relative_path().clone(), *modified);
                }
            }
        }

        if let Some(error) = session.connection_error.take() {
            return Err(error.into());
        }
        Ok(CycleReport::SessionRun { scanned, changes: changes.len(), session })
    }

    /// Runs cycles until a stop is requested. A failed cycle is reported and
    /// the loop carries on after the usual interval.
    pub fn run(&mut self) {
        self.events.monitor_started(self.config.root(), &self.config.endpoint);

        while !self.stop.is_stopped() {
            if let Err(err) = self.run_cycle() {
                self.events.cycle_failed(&err);
            }
            if self.stop.is_stopped() {
                break;
            }
            let interval = self.config.schedule.scan_interval;
            self.events.sleeping(interval);
            self.sleeper.sleep(interval);
        }

        self.events.monitor_stopped();
    }
}
