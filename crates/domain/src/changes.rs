use crate::model::{FileRecord, Snapshot};

/// Entries of `current` that are new, or strictly newer than in `previous`.
///
/// Neither snapshot is modified. Records come back in `current`'s path order
/// and carry the timestamp and location that were observed, so the caller
/// can upload the file and commit the timestamp.
pub fn detect_changes(previous: &Snapshot, current: &Snapshot) -> Vec<FileRecord> {
    current
        .records()
        .filter(|record| match previous.get(record.path.as_str()) {
            Some(seen) => record.modified.is_newer_than(seen),
            None => true,
        })
        .collect()
}
