//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal and timestamp lookup
//! - [`transfer`]: Remote upload sessions
//! - [`clock`]: Timed waits and cooperative stop requests
//! - [`events`]: Structured notifications for logging
//!
//! These ports allow the domain and use-case layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod events;
pub mod filesystem;
pub mod transfer;
