use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
};

use ftp_monitor_shared_kernel::RelativePath;

/// A single file to deliver: where to read it and what to call it remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    local_path: PathBuf,
    remote_path: String,
    relative_path: RelativePath,
}

impl UploadTask {
    pub fn new(local_path: PathBuf, remote_path: String, relative_path: RelativePath) -> Self {
        Self { local_path, remote_path, relative_path }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }

    /// Snapshot key the task was created from.
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }
}

/// FIFO of pending uploads. No deduplication: each enqueued task is handed
/// out exactly once.
#[derive(Debug, Default)]
pub struct UploadQueue {
    tasks: VecDeque<UploadTask>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, task: UploadTask) {
        self.tasks.push_back(task);
    }

    pub fn pop(&mut self) -> Option<UploadTask> {
        self.tasks.pop_front()
    }

    /// Removes every pending task in arrival order.
    pub fn drain(&mut self) -> Vec<UploadTask> {
        self.tasks.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Extend<UploadTask> for UploadQueue {
    fn extend<I: IntoIterator<Item = UploadTask>>(&mut self, iter: I) {
        self.tasks.extend(iter);
    }
}
