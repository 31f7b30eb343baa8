// tests/common/mod.rs
//! Shared helpers for the root integration tests.

pub mod mocks;
pub mod temp;

#[allow(unused_imports)]
pub use mocks::*;
#[allow(unused_imports)]
pub use temp::TempWorkspace;
