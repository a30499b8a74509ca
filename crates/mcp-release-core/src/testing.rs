//! Scripted command runner for tests

use std::cell::RefCell;

use crate::error::CommandError;
use crate::process::{display_command, CommandOutput, CommandRunner};

enum Scripted {
    Output(CommandOutput),
    SpawnError(String),
}

/// A [`CommandRunner`] that answers from a script and records every call.
///
/// Rules match on the start of the rendered command line; the first matching
/// rule wins. Unmatched commands succeed with empty output.
#[derive(Default)]
pub struct FakeRunner {
    rules: Vec<(String, Scripted)>,
    unavailable: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    /// Create an empty runner
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `prefix` with a successful exit and `stdout`
    pub fn with_output(mut self, prefix: &str, stdout: &str) -> Self {
        self.rules
            .push((prefix.to_string(), Scripted::Output(CommandOutput::success(stdout))));
        self
    }

    /// Answer `prefix` with exit `code` and `stderr`
    pub fn with_failure(mut self, prefix: &str, code: i32, stderr: &str) -> Self {
        self.rules.push((
            prefix.to_string(),
            Scripted::Output(CommandOutput::failure(code, stderr)),
        ));
        self
    }

    /// Fail to start commands matching `prefix`
    pub fn with_spawn_error(mut self, prefix: &str, reason: &str) -> Self {
        self.rules
            .push((prefix.to_string(), Scripted::SpawnError(reason.to_string())));
        self
    }

    /// Report `program` as missing from PATH
    pub fn with_unavailable(mut self, program: &str) -> Self {
        self.unavailable.push(program.to_string());
        self
    }

    /// Rendered command lines in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let line = display_command(program, args);
        self.calls.borrow_mut().push(line.clone());

        match self.rules.iter().find(|(prefix, _)| line.starts_with(prefix.as_str())) {
            Some((_, Scripted::Output(output))) => Ok(output.clone()),
            Some((_, Scripted::SpawnError(reason))) => Err(CommandError::Spawn {
                command: line,
                reason: reason.clone(),
            }),
            None => Ok(CommandOutput::success("")),
        }
    }

    fn is_available(&self, program: &str) -> bool {
        !self.unavailable.iter().any(|p| p == program)
    }
}
