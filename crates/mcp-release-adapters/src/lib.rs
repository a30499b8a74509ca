//! mcp-release Adapters - Build tool adapters for release automation
//!
//! This crate resolves the release version from Maven and rewrites the
//! starter's version references in documentation and example builds.

pub mod docs;
pub mod maven;

pub use docs::{DocsReport, DocsRewriter, FileReport};
pub use maven::{resolve_release_version, ArtifactCoordinates, MavenAdapter, VersionReferences};
