//! mcp-release Core - Core library for release automation
//!
//! This crate provides the error types, configuration and the command runner
//! abstraction shared by the release utilities.

pub mod config;
pub mod error;
pub mod process;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use config::ReleaseConfig;
pub use error::{ErrorKind, ReleaseError, Result};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use types::{CommitOutcome, FileUpdate};
