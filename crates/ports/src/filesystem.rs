// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use ftp_monitor_shared_kernel::{ModificationTime, ScanResult};
use serde::{Deserialize, Serialize};

/// One entry produced by a recursive walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), is_dir: false }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), is_dir: true }
    }
}

/// Port for reading the monitored tree.
pub trait FileSystem: Send + Sync {
    /// Every entry below `root`, in a stable order. Fails only when `root`
    /// itself cannot be read.
    fn walk(&self, root: &Path) -> ScanResult<Vec<WalkEntry>>;

    fn modified(&self, path: &Path) -> std::io::Result<ModificationTime>;
}
