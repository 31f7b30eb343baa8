use std::io::Write;

use chrono::Local;
use ftp_monitor_shared_kernel::{InfraResult, InfrastructureError};
use log::LevelFilter;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default level for a count of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger. `RUST_LOG`, when set, takes precedence over
/// `verbosity`.
///
/// # Errors
///
/// Fails if a logger has already been installed.
pub fn init(verbosity: u8) -> InfraResult<()> {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format(|buf, record| {
            writeln!(buf, "{} [{:<5}] {}", Local::now().format(TIMESTAMP_FORMAT), record.level(), record.args())
        })
        .try_init()
        .map_err(|err| InfrastructureError::LoggerInit { details: err.to_string() })
}
