use std::time::Duration;

use ftp_monitor_shared_kernel::{DomainError, DomainResult};

/// Timing knobs for the monitor loop and upload sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Pause between two scan cycles.
    pub scan_interval: Duration,
    /// Pause after a successful upload before the next one starts.
    pub pacing_delay: Duration,
    /// Total connection attempts per session, including the first.
    pub retry_attempts: u32,
    /// Pause between two connection attempts.
    pub retry_delay: Duration,
}

impl Schedule {
    pub const DEFAULT_INTERVAL_SECS: u64 = 60;
    pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
    pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;

    pub fn validate(&self) -> DomainResult<()> {
        if self.scan_interval.is_zero() {
            return Err(DomainError::RangeValidation {
                field: "interval_seconds".into(),
                min: "1".into(),
                max: u64::MAX.to_string(),
            });
        }
        if self.retry_attempts == 0 {
            return Err(DomainError::RangeValidation {
                field: "retry_attempts".into(),
                min: "1".into(),
                max: u32::MAX.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_secs(Self::DEFAULT_INTERVAL_SECS),
            pacing_delay: Duration::ZERO,
            retry_attempts: Self::DEFAULT_RETRY_ATTEMPTS,
            retry_delay: Duration::from_secs(Self::DEFAULT_RETRY_DELAY_SECS),
        }
    }
}
