//! Staging and committing

use std::path::Path;

use tracing::{info, instrument};

use crate::repository::{GitRepo, Result};
use crate::status::path_args;
use mcp_release_core::types::CommitOutcome;

impl GitRepo<'_> {
    /// Stage `paths` (`git add`)
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub fn stage(&self, paths: &[&Path]) -> Result<()> {
        let rendered = path_args(paths);
        let mut args = vec!["add"];
        args.extend(rendered.iter().map(String::as_str));

        self.git_checked(&args)?;
        Ok(())
    }

    /// Commit the index with `message`
    #[instrument(skip(self))]
    pub fn commit(&self, message: &str) -> Result<()> {
        self.git_checked(&["commit", "-m", message])?;
        info!(message, "created commit");
        Ok(())
    }

    /// Stage and commit `paths` only when git reports a difference
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub fn commit_if_changed(&self, paths: &[&Path], message: &str) -> Result<CommitOutcome> {
        if !self.has_changes(paths)? {
            info!("no changes to commit");
            return Ok(CommitOutcome::NoChanges);
        }

        self.stage(paths)?;
        self.commit(message)?;

        Ok(CommitOutcome::Committed {
            message: message.to_string(),
        })
    }
}
