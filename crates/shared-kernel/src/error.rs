// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MonitorError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, MonitorError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Range validation failed: {field} must be between {min} and {max}")]
    RangeValidation {
        field: String,
        min: String,
        max: String,
    },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// The monitored tree could not be enumerated.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("monitor root '{path}' is unavailable: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("monitor root '{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Failures establishing or tearing down a transfer session.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: BoxedSource,
    },

    #[error("login as '{user}' on {endpoint} rejected: {source}")]
    Login {
        endpoint: String,
        user: String,
        #[source]
        source: BoxedSource,
    },

    #[error("giving up on {endpoint} after {attempts} attempt(s): {last}")]
    Exhausted {
        endpoint: String,
        attempts: u32,
        #[source]
        last: Box<ConnectionError>,
    },

    #[error("failed to close session with {endpoint}: {source}")]
    Close {
        endpoint: String,
        #[source]
        source: BoxedSource,
    },
}

impl ConnectionError {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

/// Per-file upload failure. Never aborts the surrounding session.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot open '{path}': {source}")]
    OpenLocal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create remote directory '{path}': {source}")]
    RemoteDirectory {
        path: String,
        #[source]
        source: BoxedSource,
    },

    #[error("store of '{remote}' failed: {source}")]
    Store {
        remote: String,
        #[source]
        source: BoxedSource,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported configuration format for '{path}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Logger initialisation failed: {details}")]
    LoggerInit { details: String },

    #[error("Signal handler installation failed: {details}")]
    SignalHandler { details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MonitorError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MonitorError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MonitorError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
