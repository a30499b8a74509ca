//! Output formatting utilities

use console::{style, Style};

use mcp_release_core::error::{AdapterError, ChangelogError, ConfigError, GitError};
use mcp_release_core::{ErrorKind, ReleaseError};
use mcp_release_github::PublishError;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message to stderr
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for version numbers
pub fn version_style() -> Style {
    Style::new().green().bold()
}

/// Style for tags
pub fn tag_style() -> Style {
    Style::new().yellow()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Classification of the first library error in the chain
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<ReleaseError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<PublishError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<ChangelogError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<GitError>() {
            Some(e.kind())
        } else if let Some(e) = cause.downcast_ref::<ConfigError>() {
            Some(e.kind())
        } else {
            cause.downcast_ref::<AdapterError>().map(AdapterError::kind)
        }
    })
}
