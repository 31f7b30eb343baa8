// crates/ports/src/transfer.rs
use std::path::Path;

use ftp_monitor_shared_kernel::{ConnectionError, Endpoint, UploadError};

/// An open, authenticated session with the remote server.
pub trait TransferSession: Send {
    /// Uploads the file at `local` under `remote` (a `/`-separated path).
    fn store(&mut self, local: &Path, remote: &str) -> Result<(), UploadError>;

    /// Ends the session. The session is gone whether or not this succeeds.
    fn close(self: Box<Self>) -> Result<(), ConnectionError>;
}

/// Opens sessions. A single call is a single attempt; retrying is up to the caller.
pub trait TransferConnector: Send + Sync {
    fn connect(&self, endpoint: &Endpoint) -> Result<Box<dyn TransferSession>, ConnectionError>;
}
