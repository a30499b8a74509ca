//! Tag operations

use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use mcp_release_core::error::GitError;
use mcp_release_core::process::display_command;

/// What `git describe` prints when no tag is reachable
const NO_TAGS_MESSAGE: &str = "No names found";

/// Strip the literal `prefix` from `tag`, returning the version.
///
/// The remainder must be non-empty.
pub fn parse_version_from_tag(tag: &str, prefix: &str) -> Result<String> {
    match tag.strip_prefix(prefix) {
        Some(version) if !version.is_empty() => Ok(version.to_string()),
        _ => Err(GitError::TagFormat {
            tag: tag.to_string(),
            prefix: prefix.to_string(),
        }),
    }
}

impl GitRepo<'_> {
    /// Most recent tag reachable from HEAD (`git describe --tags --abbrev=0`)
    #[instrument(skip(self))]
    pub fn latest_tag(&self) -> Result<String> {
        let args = ["describe", "--tags", "--abbrev=0"];
        let output = self.git(&args)?;
        if !output.is_success() && output.stderr.contains(NO_TAGS_MESSAGE) {
            return Err(GitError::NoTags);
        }

        let output = output.check(&display_command(self.program(), &args))?;
        let tag = output.stdout.trim().to_string();

        if tag.is_empty() {
            return Err(GitError::NoTags);
        }

        debug!(tag = %tag, "found latest tag");
        Ok(tag)
    }

    /// Latest tag parsed as a release tag with `prefix`
    #[instrument(skip(self))]
    pub fn latest_release_tag(&self, prefix: &str) -> Result<TagInfo> {
        let tag = TagInfo::parse(self.latest_tag()?, prefix)?;
        info!(tag = %tag.name, version = %tag.version, "resolved release tag");
        Ok(tag)
    }
}
