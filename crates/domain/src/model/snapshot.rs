use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use ftp_monitor_shared_kernel::{ModificationTime, RelativePath};

/// One observed file: where it lives under the root and when it last changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: RelativePath,
    pub modified: ModificationTime,
    /// The path as the walk produced it. `path` is a lossy UTF-8 rendering,
    /// so this is what must be opened when the file is uploaded.
    pub source: Option<PathBuf>,
}

impl FileRecord {
    pub fn new(path: RelativePath, modified: ModificationTime) -> Self {
        Self { path, modified, source: None }
    }

    #[must_use]
    pub fn located_at(mut self, source: PathBuf) -> Self {
        self.source = Some(source);
        self
    }

    /// Where to read the file from, falling back to `path` joined onto `root`.
    pub fn local_path(&self, root: &Path) -> PathBuf {
        match &self.source {
            Some(source) => source.clone(),
            None => self.path.to_local(root),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
    modified: ModificationTime,
    source: Option<PathBuf>,
}

/// Relative path → last-modified timestamp for every qualifying file.
///
/// Backed by a `BTreeMap` so iteration, and therefore change detection, is
/// deterministic for a given set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<RelativePath, Observed>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `modified` for `path`, returning the previous timestamp.
    pub fn insert(&mut self, path: RelativePath, modified: ModificationTime) -> Option<ModificationTime> {
        self.record(FileRecord::new(path, modified))
    }

    pub fn record(&mut self, record: FileRecord) -> Option<ModificationTime> {
        let observed = Observed { modified: record.modified, source: record.source };
        self.entries.insert(record.path, observed).map(|previous| previous.modified)
    }

    pub fn remove(&mut self, path: &str) -> Option<ModificationTime> {
        self.entries.remove(path).map(|observed| observed.modified)
    }

    pub fn get(&self, path: &str) -> Option<&ModificationTime> {
        self.entries.get(path).map(|observed| &observed.modified)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RelativePath, &ModificationTime)> + '_ {
        self.entries.iter().map(|(path, observed)| (path, &observed.modified))
    }

    /// Overwrites entries with those of `other`. Entries missing from `other`
    /// are kept: files deleted from disk stay in the baseline.
    pub fn merge(&mut self, other: Snapshot) {
        self.entries.extend(other.entries);
    }

    pub fn records(&self) -> impl Iterator<Item = FileRecord> + '_ {
        self.entries.iter().map(|(path, observed)| FileRecord {
            path: path.clone(),
            modified: observed.modified,
            source: observed.source.clone(),
        })
    }
}

impl FromIterator<FileRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for record in iter {
            snapshot.record(record);
        }
        snapshot
    }
}

impl Extend<FileRecord> for Snapshot {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.record(record);
        }
    }
}
