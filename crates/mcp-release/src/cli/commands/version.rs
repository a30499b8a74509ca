//! Version command

use std::path::Path;

use clap::Args;
use tracing::info;

use mcp_release_adapters::{resolve_release_version, MavenAdapter};
use mcp_release_core::{CommandRunner, ReleaseConfig, SystemRunner};

use crate::cli::{Cli, OutputFormat};

/// Release version override shared by the commands that need a version
#[derive(Debug, Clone, Default, Args)]
pub struct ReleaseVersionArgs {
    /// Release version to use instead of the Maven project version
    #[arg(long = "release-version", env = "RELEASE_VERSION", value_name = "VERSION")]
    pub release_version: Option<String>,
}

impl ReleaseVersionArgs {
    /// Override if set, otherwise the Maven project version without its snapshot suffix
    pub fn resolve(
        &self,
        config: &ReleaseConfig,
        runner: &dyn CommandRunner,
        root: &Path,
    ) -> anyhow::Result<String> {
        let adapter = MavenAdapter::from_config(&config.versioning);
        Ok(resolve_release_version(
            self.release_version.as_deref(),
            &adapter,
            runner,
            root,
        )?)
    }
}

/// Print the release version
#[derive(Debug, Args)]
pub struct VersionCommand {
    #[command(flatten)]
    pub release: ReleaseVersionArgs,
}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(release_version = ?self.release.release_version, "executing version command");
        let root = cli.root()?;
        let config = cli.load_config(&root)?;
        let runner = SystemRunner::new(&root);

        let version = self.release.resolve(&config, &runner, &root)?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "version": version });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => println!("{}", version),
        }
        Ok(())
    }
}
