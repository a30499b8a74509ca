//! Error types for the release utilities

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Operator-facing classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credentials or tools, invalid configuration, empty derived version
    Configuration,
    /// Missing file or missing required document section
    NotFound,
    /// Value does not match its expected format
    Format,
    /// An invoked process failed
    ExternalCommand,
    /// Network-level failure
    Transport,
    /// Non-2xx response from a remote API
    Api,
    /// Any other filesystem failure
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configuration => "configuration error",
            Self::NotFound => "not found",
            Self::Format => "format error",
            Self::ExternalCommand => "external command error",
            Self::Transport => "transport error",
            Self::Api => "API error",
            Self::Io => "I/O error",
        };
        f.write_str(name)
    }
}

/// Main error type for release operations
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// External command errors
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Adapter-related errors
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl ReleaseError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::Command(e) => e.kind(),
            Self::Git(e) => e.kind(),
            Self::Changelog(e) => e.kind(),
            Self::Adapter(e) => e.kind(),
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Required executable is not on PATH
    #[error("{0} executable not found in PATH")]
    ToolNotFound(String),

    /// The build tool could not report a version
    #[error("Unable to determine project version from {tool}: {reason}")]
    VersionUnavailable { tool: String, reason: String },

    /// Derived version is empty
    #[error("Derived release version is empty")]
    EmptyVersion,

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}

/// Failure of an invoked process
#[derive(Debug, Error)]
pub enum CommandError {
    /// Process could not be started
    #[error("Failed to run `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    /// Process exited unsuccessfully
    #[error("`{command}` exited with {}: {stderr}", exit_status(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl CommandError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ExternalCommand
    }
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// No tags found
    #[error("No git tags found; make sure the repository has at least one tag")]
    NoTags,

    /// Tag does not carry the expected prefix
    #[error("Tag '{tag}' does not match expected format '{prefix}<version>'")]
    TagFormat { tag: String, prefix: String },

    /// Git command failed
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl GitError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoTags => ErrorKind::NotFound,
            Self::TagFormat { .. } => ErrorKind::Format,
            Self::Command(e) => e.kind(),
        }
    }
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog file not found
    #[error("Changelog file not found at \"{0}\"")]
    FileNotFound(PathBuf),

    /// No heading containing the section marker
    #[error("\"{heading}\" section not found in \"{path}\"")]
    SectionNotFound { path: PathBuf, heading: String },

    /// No line exactly equal to the heading
    #[error("Failed to update release heading in \"{path}\": no line equal to \"{heading}\"")]
    HeadingNotFound { path: PathBuf, heading: String },

    /// Release notes file not found
    #[error("Release notes file not found: {0}")]
    NotesNotFound(PathBuf),

    /// Failed to write a file
    #[error("Failed to write \"{path}\": {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChangelogError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound(_)
            | Self::SectionNotFound { .. }
            | Self::HeadingNotFound { .. }
            | Self::NotesNotFound(_) => ErrorKind::NotFound,
            Self::WriteFailed { .. } | Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Adapter-related errors
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Required documentation or manifest file not found
    #[error("File not found at \"{0}\"")]
    ManifestNotFound(PathBuf),

    /// Invalid file discovery pattern
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    /// Invalid version-reference pattern
    #[error("Invalid version pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Failed to update a file
    #[error("Failed to update \"{path}\": {source}")]
    UpdateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AdapterError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestNotFound(_) => ErrorKind::NotFound,
            Self::InvalidGlob { .. } | Self::InvalidPattern { .. } => ErrorKind::Configuration,
            Self::UpdateFailed { .. } => ErrorKind::Io,
        }
    }
}
