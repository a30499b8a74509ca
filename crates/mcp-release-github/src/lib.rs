//! mcp-release GitHub - Release publishing for release automation
//!
//! This crate creates GitHub releases from a tag and its release notes.
//!
//! ## Usage
//!
//! ```ignore
//! use mcp_release_github::{CreateReleaseRequest, GitHubReleases, ReleaseHost};
//!
//! let host = GitHubReleases::new(&config.github, token)?;
//! let release = host.create_release(&request).await?;
//! println!("{}", release.html_url);
//! ```

pub mod error;
pub mod github;
pub mod traits;
pub mod types;

pub use error::PublishError;
pub use github::GitHubReleases;
pub use traits::ReleaseHost;
pub use types::*;
