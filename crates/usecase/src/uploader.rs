// crates/usecase/src/uploader.rs
use ftp_monitor_domain::{Schedule, UploadTask};
use ftp_monitor_ports::{
    clock::{Sleeper, StopSignal},
    events::MonitorEvents,
    transfer::{TransferConnector, TransferSession},
};
use ftp_monitor_shared_kernel::{ConnectionError, Endpoint};

use crate::dto::{FailedUpload, SessionReport, SessionState};

/// Runs transfer sessions: connect with retry, store each task in order,
/// close.
///
/// A failed store is reported and the session moves on to the next task.
/// Failed tasks are never retried within the same session.
pub struct Uploader<'a> {
    connector: &'a dyn TransferConnector,
    sleeper: &'a dyn Sleeper,
    events: &'a dyn MonitorEvents,
    stop: StopSignal,
}

impl<'a> Uploader<'a> {
    pub fn new(connector: &'a dyn TransferConnector, sleeper: &'a dyn Sleeper, events: &'a dyn MonitorEvents) -> Self {
        Self { connector, sleeper, events, stop: StopSignal::new() }
    }

    #[must_use]
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    pub fn run_session(&self, endpoint: &Endpoint, schedule: &Schedule, tasks: Vec<UploadTask>) -> SessionReport {
        let mut report = SessionReport::new();

        let mut session = match self.connect_with_retry(endpoint, schedule, &mut report) {
            Ok(session) => session,
            Err(err) => {
                report.state = SessionState::Failed;
                report.connection_error = Some(err);
                report.not_attempted = tasks;
                return report;
            }
        };
        report.state = SessionState::Connected;
        self.events.connected(endpoint);

        self.store_all(session.as_mut(), schedule, tasks, &mut report);

        report.state = SessionState::Closing;
        if let Err(err) = session.close() {
            self.events.close_failed(&err);
            report.close_error = Some(err);
        }
        report.state = SessionState::Closed;
        self.events.session_closed(report.uploaded.len(), report.failed.len(), report.skipped.len());
        report
    }

    fn connect_with_retry(
        &self,
        endpoint: &Endpoint,
        schedule: &Schedule,
        report: &mut SessionReport,
    ) -> Result<Box<dyn TransferSession>, ConnectionError> {
        let max_attempts = schedule.retry_attempts.max(1);

        loop {
            report.connect_attempts += 1;
            let attempt = report.connect_attempts;
            self.events.connecting(endpoint, attempt, max_attempts);

            let err = match self.connector.connect(endpoint) {
                Ok(session) => return Ok(session),
                Err(err) => err,
            };
            self.events.connection_failed(attempt, max_attempts, &err);

            if attempt >= max_attempts || self.stop.is_stopped() {
                return Err(ConnectionError::Exhausted {
                    endpoint: endpoint.to_string(),
                    attempts: attempt,
                    last: Box::new(err),
                });
            }
            self.events.retrying(schedule.retry_delay);
            self.sleeper.sleep(schedule.retry_delay);
        }
    }

    fn store_all(
        &self,
        session: &mut dyn TransferSession,
        schedule: &Schedule,
        tasks: Vec<UploadTask>,
        report: &mut SessionReport,
    ) {
        let mut pending = tasks.into_iter().peekable();

        while let Some(task) = pending.next() {
            if self.stop.is_stopped() {
                report.skipped.push(task);
                report.skipped.extend(pending);
                return;
            }

            match session.store(task.local_path(), task.remote_path()) {
                Ok(()) => {
                    self.events.uploaded(&task);
                    report.uploaded.push(task);
                    // no pacing wait after the final task
                    if pending.peek().is_some() && !schedule.pacing_delay.is_zero() {
                        self.sleeper.sleep(schedule.pacing_delay);
                    }
                }
                Err(error) => {
                    self.events.upload_failed(&task, &error);
                    report.failed.push(FailedUpload { task, error });
                }
            }
        }
    }
}
