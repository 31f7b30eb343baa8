use std::fmt;

use serde::{Deserialize, Serialize};

/// When an observed timestamp becomes part of the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePolicy {
    /// Changed entries are committed only once their upload succeeded, so a
    /// failed delivery is picked up again by the next scan.
    #[default]
    CommitOnDelivery,
    /// The whole scan is committed before uploading; failed deliveries are
    /// not retried unless the file changes again.
    CommitOnScan,
}

impl fmt::Display for BaselinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CommitOnDelivery => "commit_on_delivery",
            Self::CommitOnScan => "commit_on_scan",
        })
    }
}
