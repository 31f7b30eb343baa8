// crates/shared-kernel/src/value_objects/mod.rs
pub mod endpoint;
pub mod file_info;

pub use endpoint::{Credentials, Endpoint};
pub use file_info::{ModificationTime, RelativePath};
