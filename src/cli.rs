// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use ftp_monitor_infra::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "ftp-monitor",
    version,
    about = "Watch a directory tree and upload new or modified files over FTP"
)]
pub struct Args {
    /// Configuration file (.yaml, .yml or .json)
    #[arg(short, long, default_value = "config.yaml", value_hint = ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory to monitor, overriding `monitor.path`
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub path: Option<PathBuf>,

    /// Seconds between scans, overriding `monitor.interval_seconds`
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Validate the configuration, print a summary and exit
    #[arg(long)]
    pub check: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides { path: self.path.clone(), interval_seconds: self.interval }
    }
}
