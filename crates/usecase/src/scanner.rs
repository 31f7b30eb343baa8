use std::path::Path;

use ftp_monitor_domain::{FileRecord, RuleSet, Snapshot};
use ftp_monitor_ports::filesystem::FileSystem;
use ftp_monitor_shared_kernel::{RelativePath, ScanResult};

/// Builds snapshots of the monitored tree through the filesystem port.
pub struct DirectoryScanner<'a> {
    filesystem: &'a dyn FileSystem,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(filesystem: &'a dyn FileSystem) -> Self {
        Self { filesystem }
    }

    /// Walks `root` and records the timestamp of every file `rules` accepts.
    ///
    /// # Errors
    ///
    /// Fails only when `root` itself cannot be walked. A file that disappears
    /// between the walk and the timestamp lookup is skipped.
    pub fn scan(&self, root: &Path, rules: &RuleSet) -> ScanResult<Snapshot> {
        let mut snapshot = Snapshot::new();

        for entry in self.filesystem.walk(root)? {
            if entry.is_dir {
                continue;
            }
            let Some(relative) = RelativePath::from_root(root, &entry.path) else {
                continue;
            };
            if !rules.qualifies(relative.as_str()) {
                continue;
            }
            match self.filesystem.modified(&entry.path) {
                Ok(modified) => {
                    snapshot.record(FileRecord::new(relative, modified).located_at(entry.path));
                }
                Err(err) => log::warn!("skipping {}: {err}", entry.path.display()),
            }
        }

        Ok(snapshot)
    }
}
