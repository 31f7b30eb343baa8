// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod config;
pub mod console;
pub mod filesystem;
pub mod logging;
pub mod transfer;

pub use clock::StopAwareSleeper;
pub use config::{ConfigFile, ConfigOverrides};
pub use console::ConsoleEvents;
pub use filesystem::LocalFileSystem;
pub use transfer::FtpConnector;
