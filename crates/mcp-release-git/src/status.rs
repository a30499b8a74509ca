//! Working tree status

use std::path::Path;

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use mcp_release_core::error::CommandError;
use mcp_release_core::process::display_command;

/// Render paths as git arguments
pub(crate) fn path_args(paths: &[&Path]) -> Vec<String> {
    paths.iter().map(|p| p.to_string_lossy().into_owned()).collect()
}

impl GitRepo<'_> {
    /// Whether any of `paths` differ from the index (`git diff --quiet`).
    ///
    /// Exit status 1 means "differences found"; any other non-zero status is a
    /// git failure.
    #[instrument(skip(self, paths), fields(count = paths.len()))]
    pub fn has_changes(&self, paths: &[&Path]) -> Result<bool> {
        let rendered = path_args(paths);
        let mut args = vec!["diff", "--quiet", "--"];
        args.extend(rendered.iter().map(String::as_str));

        let output = self.git(&args)?;
        let changed = match output.code {
            Some(0) => false,
            Some(1) => true,
            _ => {
                return Err(CommandError::Failed {
                    command: display_command(self.program(), &args),
                    code: output.code,
                    stderr: output.stderr.trim().to_string(),
                }
                .into())
            }
        };

        debug!(changed, "checked working tree");
        Ok(changed)
    }
}
