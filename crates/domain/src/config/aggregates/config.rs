use std::path::{Path, PathBuf};

use ftp_monitor_shared_kernel::{DomainError, DomainResult, Endpoint};

use crate::{
    config::{BaselinePolicy, RuleSet, Schedule},
    model::{FileRecord, UploadTask},
};

/// Fully resolved settings the monitor loop runs with.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub root: PathBuf,
    pub endpoint: Endpoint,
    pub rules: RuleSet,
    pub schedule: Schedule,
    pub baseline_policy: BaselinePolicy,
}

impl MonitorConfig {
    pub fn new(
        root: PathBuf,
        endpoint: Endpoint,
        rules: RuleSet,
        schedule: Schedule,
        baseline_policy: BaselinePolicy,
    ) -> DomainResult<Self> {
        if root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "monitor path is empty".into() });
        }
        if endpoint.host.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "ftp host is empty".into() });
        }
        schedule.validate()?;
        Ok(Self { root, endpoint, rules, schedule, baseline_policy })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Upload task for a file found under the monitored root.
    pub fn task_for(&self, record: &FileRecord) -> UploadTask {
        UploadTask::new(
            record.local_path(&self.root),
            self.endpoint.remote_name(record.path.as_str()),
            record.path.clone(),
        )
    }
}
