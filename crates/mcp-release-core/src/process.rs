//! External command execution
//!
//! Git and the build tool are reached through [`CommandRunner`] so callers can
//! substitute a scripted runner in tests instead of spawning real binaries.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, instrument};

use crate::error::CommandError;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with status 0
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into a [`CommandError::Failed`]
    pub fn check(self, command: &str) -> Result<Self, CommandError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CommandError::Failed {
                command: command.to_string(),
                code: self.code,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Render a program and its arguments for messages and logs
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Capability to run external programs
pub trait CommandRunner {
    /// Run a program to completion, capturing its output.
    ///
    /// A non-zero exit is not an error here; use [`CommandRunner::run_checked`]
    /// when any failure should abort.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;

    /// Check whether a program can be started
    fn is_available(&self, program: &str) -> bool;

    /// Run a program and fail on a non-zero exit
    fn run_checked(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.run(program, args)?
            .check(&display_command(program, args))
    }
}

/// Runs real processes inside a fixed working directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    /// Create a runner rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Working directory of spawned processes
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Programs given as relative paths (`./mvnw`) resolve against the root
    fn resolve(&self, program: &str) -> PathBuf {
        if program.contains('/') || program.contains('\\') {
            self.root.join(program)
        } else {
            PathBuf::from(program)
        }
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let start = std::time::Instant::now();
        let output = Command::new(self.resolve(program))
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| CommandError::Spawn {
                command: display_command(program, args),
                reason: e.to_string(),
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            command = %display_command(program, args),
            code = ?result.code,
            duration_ms = start.elapsed().as_millis(),
            "command finished"
        );
        Ok(result)
    }

    fn is_available(&self, program: &str) -> bool {
        let resolved = self.resolve(program);
        let found = if resolved.is_absolute() || resolved.components().count() > 1 {
            resolved.is_file()
        } else {
            which::which(program).is_ok()
        };
        debug!(program, found, "checked program availability");
        found
    }
}
