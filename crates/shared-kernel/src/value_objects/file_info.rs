// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Borrow,
    fmt,
    path::{Component, Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Path of a file relative to the monitored root, always `/`-separated.
///
/// This is the key of a snapshot and doubles as the remote name of the file,
/// so it must not depend on the host's separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Builds a relative path from an already normalised string.
    /// Backslashes are converted so Windows-style input keys identically.
    pub fn new(path: impl Into<String>) -> Self {
        let raw: String = path.into();
        Self(raw.replace('\\', "/").trim_start_matches('/').to_string())
    }

    /// Computes `path` relative to `root`. Returns `None` when `path` is not
    /// below `root` or resolves to the root itself.
    pub fn from_root(root: &Path, path: &Path) -> Option<Self> {
        let stripped = path.strip_prefix(root).ok()?;
        let parts: Vec<String> = stripped
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(Self(parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Joins the relative path onto a local root using native separators.
    pub fn to_local(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }
}

impl From<&str> for RelativePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RelativePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RelativePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last-modified timestamp reported by the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ModificationTime(DateTime<Local>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Local>) -> Self {
        Self(timestamp)
    }

    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.0 > other.0
    }
}

impl From<DateTime<Local>> for ModificationTime {
    fn from(timestamp: DateTime<Local>) -> Self {
        Self::new(timestamp)
    }
}

impl From<SystemTime> for ModificationTime {
    fn from(time: SystemTime) -> Self {
        Self::new(DateTime::<Local>::from(time))
    }
}

impl fmt::Display for ModificationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}
