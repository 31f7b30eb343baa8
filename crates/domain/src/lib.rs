//! # Domain
//!
//! Pure monitoring logic with no I/O:
//!
//! - [`config`]: validated configuration, glob rules and timing
//! - [`model`]: snapshots of observed files and the upload queue
//! - [`changes`]: comparison of two snapshots

#![allow(clippy::multiple_crate_versions)]

pub mod changes;
pub mod config;
pub mod model;

pub use changes::detect_changes;
pub use config::{BaselinePolicy, GlobPattern, MonitorConfig, RuleSet, Schedule};
pub use model::{FileRecord, Snapshot, UploadQueue, UploadTask};
