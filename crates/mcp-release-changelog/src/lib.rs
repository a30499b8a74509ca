//! mcp-release Changelog - Unreleased-section handling for release automation
//!
//! This crate extracts the `## [Unreleased]` block of a Keep a Changelog style
//! document into a release notes file and opens a new versioned section.

pub mod notes;
pub mod splitter;
pub mod types;
pub mod unreleased;

pub use notes::read_release_notes;
pub use splitter::{ChangelogSplitter, SplitOutcome};
pub use types::ReleaseHeading;
pub use unreleased::{extract_unreleased, insert_release_heading, UNRELEASED_HEADING};
