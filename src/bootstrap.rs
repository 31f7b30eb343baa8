// src/bootstrap.rs
use std::path::Path;

use anyhow::Result;
use ftp_monitor_domain::MonitorConfig;
use ftp_monitor_infra::{ConfigFile, ConfigOverrides, ConsoleEvents, FtpConnector, LocalFileSystem, StopAwareSleeper, logging};
use ftp_monitor_ports::clock::StopSignal;
use ftp_monitor_shared_kernel::{ErrorContext, InfrastructureError};
use ftp_monitor_usecase::{MonitorLoop, MonitorPorts};

use crate::cli::Args;

/// Entry point behind `main`: load the configuration, wire the adapters and
/// run until Ctrl-C.
///
/// # Errors
///
/// Returns an error if logging, the configuration or the signal handler
/// cannot be set up. Failures inside the loop are logged, not returned.
pub fn run(args: Args) -> Result<()> {
    logging::init(args.verbose)?;

    let config = load_config(&args.config, &args.overrides())?;
    if args.check {
        print!("{}", summary(&config));
        return Ok(());
    }

    let stop = StopSignal::new();
    install_stop_handler(stop.clone())?;

    let filesystem = LocalFileSystem::new();
    let connector = FtpConnector::new();
    let sleeper = StopAwareSleeper::new(stop.clone());
    let events = ConsoleEvents::new();
    let ports = MonitorPorts { filesystem: &filesystem, connector: &connector, sleeper: &sleeper, events: &events };

    MonitorLoop::new(config, ports, stop).run();
    Ok(())
}

/// Reads `path`, applies command-line overrides and validates the result.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or when validation fails.
pub fn load_config(path: &Path, overrides: &ConfigOverrides) -> ftp_monitor_shared_kernel::Result<MonitorConfig> {
    let mut file = ConfigFile::load(path).with_context(|| format!("loading {}", path.display()))?;
    file.apply(overrides);
    file.into_monitor_config().with_context(|| format!("validating {}", path.display()))
}

fn install_stop_handler(stop: StopSignal) -> Result<()> {
    ctrlc::set_handler(move || {
        log::info!("stop requested, finishing current step");
        stop.request_stop();
    })
    .map_err(|err| InfrastructureError::SignalHandler { details: err.to_string() })?;
    Ok(())
}

/// Human-readable description of a validated configuration.
pub fn summary(config: &MonitorConfig) -> String {
    let endpoint = &config.endpoint;
    let schedule = &config.schedule;
    let mut out = String::new();
    out.push_str("Configuration OK\n");
    out.push_str(&format!("  monitor path:    {}\n", config.root().display()));
    if !config.root().is_dir() {
        out.push_str("                   (not currently a readable directory)\n");
    }
    out.push_str(&format!("  ftp server:      {endpoint} as {}\n", endpoint.credentials.user));
    out.push_str(&format!("  remote dir:      {}\n", endpoint.remote_dir.as_deref().unwrap_or("/")));
    out.push_str(&format!("  scan interval:   {}s\n", schedule.scan_interval.as_secs()));
    out.push_str(&format!("  upload delay:    {}s\n", schedule.pacing_delay.as_secs()));
    out.push_str(&format!(
        "  retries:         {} attempt(s), {}s apart\n",
        schedule.retry_attempts,
        schedule.retry_delay.as_secs()
    ));
    out.push_str(&format!("  baseline policy: {}\n", config.baseline_policy));
    out.push_str(&format!("  whitelist:       {}\n", patterns(config.rules.whitelist())));
    out.push_str(&format!("  blacklist:       {}\n", patterns(config.rules.blacklist())));
    out
}

fn patterns(list: &[ftp_monitor_domain::GlobPattern]) -> String {
    if list.is_empty() {
        return "(none)".to_string();
    }
    list.iter().map(ftp_monitor_domain::GlobPattern::pattern).collect::<Vec<_>>().join(", ")
}
