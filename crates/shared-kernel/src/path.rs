use std::path::{Component, Path, PathBuf};

/// Resolve the monitored root against the working directory without touching
/// symlinks. `.` segments are dropped so relative paths computed against the
/// result stay clean; `..` is kept as written.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
    };
    joined.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}
