#![allow(dead_code)]
// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use filetime::FileTime;

/// Scratch directory whose files get explicit modification times, so change
/// detection does not depend on filesystem timestamp resolution.
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `rel` with `contents` and sets its mtime to `secs` past a fixed
    /// epoch.
    pub fn write(&self, rel: &str, contents: &str, secs: u64) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write file");
        self.touch(rel, secs);
        path
    }

    pub fn touch(&self, rel: &str, secs: u64) {
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000 + secs);
        filetime::set_file_mtime(self.dir.path().join(rel), FileTime::from_system_time(stamp)).expect("set mtime");
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.dir.path().join(rel)).expect("remove file");
    }
}
