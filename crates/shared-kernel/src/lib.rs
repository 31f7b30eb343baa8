// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConnectionError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, MonitorError, Result,
    ScanError, ScanResult, UploadError,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{Credentials, Endpoint, ModificationTime, RelativePath};
