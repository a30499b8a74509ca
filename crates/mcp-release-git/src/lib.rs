//! mcp-release Git - Git operations for release automation
//!
//! Git is driven through its command-line client so the same code path works
//! with CI credentials, and so tests can swap in a scripted runner.

mod commits;
mod repository;
mod status;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use tags::parse_version_from_tag;
pub use types::TagInfo;
