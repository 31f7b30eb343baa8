//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement the
//! monitor:
//!
//! - [`scanner`]: Turns a directory walk into a filtered snapshot
//! - [`uploader`]: One connect → upload-all → close session
//! - [`monitor`]: The baseline + steady-state loop
//! - [`dto`]: Reports returned across the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod monitor;
pub mod scanner;
pub mod uploader;


pub use dto::{CycleReport, FailedUpload, SessionReport, SessionState};
pub use monitor::{MonitorLoop, MonitorPorts};
pub use scanner::DirectoryScanner;
pub use uploader::Uploader;
