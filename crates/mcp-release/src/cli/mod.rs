//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use mcp_release_core::config::{load_config_or_default, validate_config};
use mcp_release_core::ReleaseConfig;

use commands::{
    ChangelogCommand, CompletionsCommand, DocsCommand, PublishCommand, VersionCommand,
};

/// mcp-release - Release automation for infobip-openapi-mcp
#[derive(Debug, Parser)]
#[command(name = "mcp-release")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the release version
    Version(VersionCommand),

    /// Move the unreleased changelog section into the release notes
    Changelog(ChangelogCommand),

    /// Update starter version references in docs and examples
    Docs(DocsCommand),

    /// Create the GitHub release for the latest tag
    Publish(PublishCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Version(ref cmd) => cmd.execute(&self),
            Commands::Changelog(ref cmd) => cmd.execute(&self),
            Commands::Docs(ref cmd) => cmd.execute(&self),
            Commands::Publish(ref cmd) => cmd.execute(&self),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }

    /// Absolute project root every relative path is resolved against
    ///
    /// Git resolves pathspecs against its own working directory, so a
    /// relative `-C` value must not leak into the paths handed to it.
    pub fn root(&self) -> anyhow::Result<PathBuf> {
        let dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let root = dir
            .canonicalize()
            .with_context(|| format!("Directory not found: {}", dir.display()))?;
        if !root.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }
        Ok(root)
    }

    /// Load and validate configuration for `root`
    pub fn load_config(&self, root: &Path) -> anyhow::Result<ReleaseConfig> {
        let (config, path) = load_config_or_default(root)?;
        // Files are validated while loading; built-in defaults are not
        if path.is_none() {
            validate_config(&config).context("invalid release configuration")?;
        }
        debug!(config_file = ?path, "configuration ready");
        Ok(config)
    }

    /// Whether human-readable progress lines should be printed
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn args(directory: &Path) -> Vec<OsString> {
        vec![
            "mcp-release".into(),
            "-C".into(),
            directory.as_os_str().to_owned(),
            "version".into(),
        ]
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mcp-release", "docs", "-C", "/tmp", "--format", "json"])
            .unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.show_progress());
    }

    #[test]
    fn test_missing_directory() {
        let cli = Cli::try_parse_from(["mcp-release", "-C", "/does/not/exist", "version"]).unwrap();
        assert!(cli.root().is_err());
    }

    #[test]
    fn test_relative_directory_is_absolute() {
        let temp = TempDir::new_in(".").unwrap();
        let relative = temp.path().strip_prefix(".").unwrap_or(temp.path());
        assert!(relative.is_relative());

        let cli = Cli::try_parse_from(args(relative)).unwrap();

        let root = cli.root().unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_file_is_not_a_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("pom.xml");
        std::fs::write(&file, "<project/>").unwrap();
        let cli = Cli::try_parse_from(args(&file)).unwrap();

        assert!(cli.root().is_err());
    }

    #[test]
    fn test_loaded_file_is_used() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("mcp-release.toml"),
            "[changelog]\ninclude_date = true\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from(["mcp-release", "version"]).unwrap();

        let config = cli.load_config(temp.path()).unwrap();
        assert!(config.changelog.include_date);
        assert_eq!(config.versioning.tag_prefix, "infobip-openapi-mcp-");
    }

    #[test]
    fn test_load_default_config() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["mcp-release", "version"]).unwrap();

        let config = cli.load_config(temp.path()).unwrap();
        assert_eq!(config.versioning.tag_prefix, "infobip-openapi-mcp-");
    }

    #[test]
    fn test_invalid_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("mcp-release.toml"),
            "[versioning]\ntag_prefix = \"\"\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from(["mcp-release", "version"]).unwrap();

        assert!(cli.load_config(temp.path()).is_err());
    }
}
