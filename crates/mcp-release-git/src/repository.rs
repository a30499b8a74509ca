//! Git repository handle

use tracing::{debug, instrument};

use mcp_release_core::error::GitError;
use mcp_release_core::process::{display_command, CommandOutput, CommandRunner};

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git client bound to a command runner.
///
/// The runner's working directory is the repository the commands act on.
pub struct GitRepo<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
}

impl<'a> GitRepo<'a> {
    /// Use `git` from PATH through `runner`
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self::with_program(runner, "git")
    }

    /// Use a specific git executable
    pub fn with_program(runner: &'a dyn CommandRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Git executable in use
    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    /// Run a git subcommand, returning its output regardless of exit status
    #[instrument(skip(self))]
    pub(crate) fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.runner.run(&self.program, args)?;
        debug!(code = ?output.code, "git finished");
        Ok(output)
    }

    /// Run a git subcommand that must succeed
    pub(crate) fn git_checked(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.git(args)?;
        Ok(output.check(&display_command(&self.program, args))?)
    }
}
