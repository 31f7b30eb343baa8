pub mod queue;
pub mod snapshot;

pub use queue::{UploadQueue, UploadTask};
pub use snapshot::{FileRecord, Snapshot};
