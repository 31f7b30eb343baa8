// crates/infra/src/config.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use ftp_monitor_domain::{BaselinePolicy, MonitorConfig, RuleSet, Schedule};
use ftp_monitor_shared_kernel::{
    Credentials, DomainResult, Endpoint, InfraResult, InfrastructureError, path::logical_absolute,
};
use serde::{Deserialize, Serialize};

/// On-disk configuration, as written in `config.yaml` / `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub ftp: FtpSection,
    pub monitor: MonitorSection,
    #[serde(default)]
    pub rules: RulesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FtpSection {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remote_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    pub path: PathBuf,
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    #[serde(default)]
    pub upload_delay_seconds: u64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay")]
    pub retry_delay_seconds: u64,
    #[serde(default)]
    pub baseline_policy: BaselinePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesSection {
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub blacklist: Vec<String>,
}

fn default_port() -> u16 {
    21
}

fn default_interval() -> u64 {
    Schedule::DEFAULT_INTERVAL_SECS
}

fn default_retry_attempts() -> u32 {
    Schedule::DEFAULT_RETRY_ATTEMPTS
}

fn default_retry_delay() -> u64 {
    Schedule::DEFAULT_RETRY_DELAY_SECS
}

/// Values given on the command line that win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub path: Option<PathBuf>,
    pub interval_seconds: Option<u64>,
}

impl ConfigFile {
    /// Reads and parses `path`, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, has an unknown extension, or does
    /// not parse.
    pub fn load(path: &Path) -> InfraResult<Self> {
        let format = Format::from_path(path)?;
        let text =
            fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        format.parse(&text)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.path {
            self.monitor.path.clone_from(path);
        }
        if let Some(secs) = overrides.interval_seconds {
            self.monitor.interval_seconds = secs;
        }
    }

    /// Validates the file into the settings the monitor runs with.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`](ftp_monitor_shared_kernel::DomainError) for
    /// an empty host or path, a bad pattern or an out-of-range timing value.
    pub fn into_monitor_config(self) -> DomainResult<MonitorConfig> {
        let ftp = self.ftp;
        let mut endpoint = Endpoint::new(ftp.host.trim(), ftp.port, Credentials::new(ftp.user, ftp.password));
        if let Some(dir) = ftp.remote_dir {
            endpoint = endpoint.with_remote_dir(dir);
        }

        let rules = RuleSet::new(&self.rules.whitelist, &self.rules.blacklist)?;
        let schedule = Schedule {
            scan_interval: Duration::from_secs(self.monitor.interval_seconds),
            pacing_delay: Duration::from_secs(self.monitor.upload_delay_seconds),
            retry_attempts: self.monitor.retry_attempts,
            retry_delay: Duration::from_secs(self.monitor.retry_delay_seconds),
        };
        let root = if self.monitor.path.as_os_str().is_empty() {
            PathBuf::new()
        } else {
            logical_absolute(&self.monitor.path)
        };

        MonitorConfig::new(root, endpoint, rules, schedule, self.monitor.baseline_policy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> InfraResult<Self> {
        let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }),
        }
    }

    fn parse(self, text: &str) -> InfraResult<ConfigFile> {
        Ok(match self {
            Self::Yaml => serde_yaml::from_str(text)?,
            Self::Json => serde_json::from_str(text)?,
        })
    }
}
