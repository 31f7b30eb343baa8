use ftp_monitor_domain::UploadTask;
use ftp_monitor_shared_kernel::{ConnectionError, UploadError};

/// Lifecycle of one transfer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
    Closing,
    /// Every task was handled and the session was shut down.
    Closed,
    /// No connection could be made; nothing was uploaded.
    Failed,
}

#[derive(Debug)]
pub struct FailedUpload {
    pub task: UploadTask,
    pub error: UploadError,
}

/// Outcome of [`Uploader::run_session`](crate::Uploader::run_session).
#[derive(Debug)]
pub struct SessionReport {
    pub state: SessionState,
    pub connect_attempts: u32,
    pub uploaded: Vec<UploadTask>,
    pub failed: Vec<FailedUpload>,
    /// Left over because a stop was requested mid-session.
    pub skipped: Vec<UploadTask>,
    /// Never attempted because the connection could not be established.
    pub not_attempted: Vec<UploadTask>,
    pub connection_error: Option<ConnectionError>,
    pub close_error: Option<ConnectionError>,
}

impl SessionReport {
    pub(crate) fn new() -> Self {
        Self {
            state: SessionState::Disconnected,
            connect_attempts: 0,
            uploaded: Vec::new(),
            failed: Vec::new(),
            skipped: Vec::new(),
            not_attempted: Vec::new(),
            connection_error: None,
            close_error: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }
}

/// What a single monitor iteration did.
#[derive(Debug)]
pub enum CycleReport {
    /// First successful scan; recorded without uploading anything.
    Baseline { files: usize },
    /// Steady-state scan that found nothing new.
    NoChanges { scanned: usize },
    /// Steady-state scan whose changes were handed to an upload session.
    /// Individual stores may still have failed; see `session.failed`.
    SessionRun { scanned: usize, changes: usize, session: SessionReport },
}
