// crates/infra/src/transfer.rs
use std::{fs::File, io::BufReader, path::Path};

use ftp::{FtpError, FtpStream, types::FileType};
use ftp_monitor_ports::transfer::{TransferConnector, TransferSession};
use ftp_monitor_shared_kernel::{ConnectionError, Endpoint, UploadError};

/// Opens plain FTP sessions (passive mode, binary transfers).
#[derive(Debug, Default, Clone, Copy)]
pub struct FtpConnector;

impl FtpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl TransferConnector for FtpConnector {
    fn connect(&self, endpoint: &Endpoint) -> Result<Box<dyn TransferSession>, ConnectionError> {
        let mut stream = FtpStream::connect(endpoint.address())
            .map_err(|err| ConnectionError::Connect { endpoint: endpoint.to_string(), source: Box::new(err) })?;

        let credentials = &endpoint.credentials;
        if let Err(err) = stream.login(&credentials.user, &credentials.password) {
            let _ = stream.quit();
            return Err(ConnectionError::Login {
                endpoint: endpoint.to_string(),
                user: credentials.user.clone(),
                source: Box::new(err),
            });
        }
        stream
            .transfer_type(FileType::Binary)
            .map_err(|err| ConnectionError::Connect { endpoint: endpoint.to_string(), source: Box::new(err) })?;

        log::debug!("logged in to {endpoint} as {}", credentials.user);
        Ok(Box::new(FtpSession { stream, endpoint: endpoint.to_string() }))
    }
}

pub struct FtpSession {
    stream: FtpStream,
    endpoint: String,
}

impl FtpSession {
    /// Issues `MKD` for every ancestor of `remote`. Returns the last failure,
    /// which is only meaningful if the following `STOR` fails too.
    fn ensure_parents(&mut self, remote: &str) -> Option<(String, FtpError)> {
        let mut last_failure = None;
        for dir in parent_dirs(remote) {
            if let Err(err) = self.stream.mkdir(dir) {
                log::trace!("MKD {dir} on {}: {err}", self.endpoint);
                last_failure = Some((dir.to_string(), err));
            }
        }
        last_failure
    }
}

impl TransferSession for FtpSession {
    fn store(&mut self, local: &Path, remote: &str) -> Result<(), UploadError> {
        let file = File::open(local).map_err(|source| UploadError::OpenLocal { path: local.to_path_buf(), source })?;
        let mut reader = BufReader::new(file);

        let mkdir_failure = self.ensure_parents(remote);

        match self.stream.put(remote, &mut reader) {
            Ok(()) => Ok(()),
            Err(err) => Err(match mkdir_failure {
                Some((path, mkdir_err)) => UploadError::RemoteDirectory { path, source: Box::new(mkdir_err) },
                None => UploadError::Store { remote: remote.to_string(), source: Box::new(err) },
            }),
        }
    }

    fn close(mut self: Box<Self>) -> Result<(), ConnectionError> {
        self.stream
            .quit()
            .map_err(|err| ConnectionError::Close { endpoint: self.endpoint.clone(), source: Box::new(err) })
    }
}

/// Ancestors of a `/`-separated remote path, outermost first.
fn parent_dirs(remote: &str) -> Vec<&str> {
    remote.match_indices('/').map(|(idx, _)| &remote[..idx]).filter(|dir| !dir.is_empty()).collect()
}
