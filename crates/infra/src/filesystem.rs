// crates/infra/src/filesystem.rs
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ftp_monitor_ports::filesystem::{FileSystem, WalkEntry};
use ftp_monitor_shared_kernel::{ModificationTime, ScanError, ScanResult};
use ignore::{DirEntry, WalkBuilder};

/// Reads the monitored tree from the local disk.
///
/// Every file is visited: hidden files and ignore files get no special
/// treatment, and symlinked directories are not descended into.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn walk(&self, root: &Path) -> ScanResult<Vec<WalkEntry>> {
        check_root(root)?;

        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false);
        builder.follow_links(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));

        let mut entries = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => entries.push(to_walk_entry(&entry)),
                // A subdirectory that cannot be read is skipped; the rest of
                // the tree is still reported.
                Err(err) => log::warn!("walk error under {}: {err}", root.display()),
            }
        }
        Ok(entries)
    }

    fn modified(&self, path: &Path) -> io::Result<ModificationTime> {
        fs::metadata(path)?.modified().map(ModificationTime::from)
    }
}

fn check_root(root: &Path) -> ScanResult<()> {
    let metadata =
        fs::metadata(root).map_err(|source| ScanError::RootUnavailable { path: root.to_path_buf(), source })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory { path: root.to_path_buf() });
    }
    Ok(())
}

fn to_walk_entry(entry: &DirEntry) -> WalkEntry {
    let path: PathBuf = entry.path().to_path_buf();
    let is_dir = match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        // A link to a directory is neither walked nor reported as a file.
        Some(ft) if ft.is_symlink() => fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false),
        Some(_) => false,
        None => true,
    };
    WalkEntry { path, is_dir }
}
