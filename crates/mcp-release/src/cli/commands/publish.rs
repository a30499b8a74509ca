//! Publish command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use mcp_release_changelog::read_release_notes;
use mcp_release_core::{CommandRunner, ReleaseConfig, SystemRunner};
use mcp_release_git::GitRepo;
use mcp_release_github::{
    CreateReleaseRequest, CreatedRelease, GitHubReleases, PublishError, ReleaseHost,
};

use crate::cli::{output, Cli, OutputFormat};

/// Create the GitHub release for the latest tag
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Release notes file (defaults to the configured notes file)
    #[arg(long, value_name = "FILE")]
    pub notes: Option<PathBuf>,

    /// Print the release payload without sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl PublishCommand {
    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(notes = ?self.notes, dry_run = self.dry_run, "executing publish command");
        let root = cli.root()?;
        let config = cli.load_config(&root)?;

        // Token is checked before git or the network is touched
        let token = self.token.clone().filter(|t| !t.trim().is_empty());
        if token.is_none() && !self.dry_run {
            return Err(PublishError::MissingToken.into());
        }

        let runner = SystemRunner::new(&root);
        let request = self.prepare(&config, &runner, &root, cli)?;

        if self.dry_run {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(());
        }

        let host = GitHubReleases::new(&config.github, token.unwrap_or_default())?;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let release = rt.block_on(host.create_release(&request))?;

        self.output_result(&host, &release, cli)
    }

    /// Build the release request from the latest tag and the notes file
    fn prepare(
        &self,
        config: &ReleaseConfig,
        runner: &dyn CommandRunner,
        root: &Path,
        cli: &Cli,
    ) -> anyhow::Result<CreateReleaseRequest> {
        if cli.show_progress() {
            println!(
                "{}",
                output::key_value(
                    "Repository",
                    &format!("{}/{}", config.github.owner, config.github.repo)
                )
            );
        }

        let tag = GitRepo::new(runner).latest_release_tag(&config.versioning.tag_prefix)?;
        if cli.show_progress() {
            println!(
                "{}",
                output::key_value("Latest git tag", &output::tag_style().apply_to(&tag.name).to_string())
            );
            println!(
                "{}",
                output::key_value(
                    "Release version",
                    &output::version_style().apply_to(&tag.version).to_string()
                )
            );
        }

        let notes_path = root.join(self.notes.as_ref().unwrap_or(&config.changelog.notes_file));
        let notes = read_release_notes(&notes_path)?;
        if cli.show_progress() {
            output::info(&format!(
                "Read release notes from {}",
                output::path_style().apply_to(notes_path.display())
            ));
        }

        Ok(CreateReleaseRequest::new(&tag.name, &tag.version, notes))
    }

    fn output_result(
        &self,
        host: &dyn ReleaseHost,
        release: &CreatedRelease,
        cli: &Cli,
    ) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(release)?);
            }
            OutputFormat::Text => {
                output::success(&format!(
                    "Successfully created {} release: {}",
                    host.name(),
                    release.name
                ));
                println!("{}", output::key_value("Release URL", &release.html_url));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mcp_release_core::testing::FakeRunner;
    use tempfile::TempDir;

    fn cli() -> Cli {
        Cli::try_parse_from(["mcp-release", "--quiet", "publish", "--dry-run"]).unwrap()
    }

    fn command() -> PublishCommand {
        PublishCommand {
            token: None,
            notes: None,
            dry_run: true,
        }
    }

    #[test]
    fn test_prepare_request() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("release_notes.md"), "- Added tool filtering\n").unwrap();
        let runner = FakeRunner::new()
            .with_output("git describe --tags --abbrev=0", "infobip-openapi-mcp-1.0.0\n");

        let request = command()
            .prepare(&ReleaseConfig::default(), &runner, temp.path(), &cli())
            .unwrap();

        assert_eq!(request.tag_name, "infobip-openapi-mcp-1.0.0");
        assert_eq!(request.name, "Release 1.0.0");
        assert_eq!(request.body, "- Added tool filtering\n");
        assert!(!request.draft);
        assert!(!request.prerelease);
    }

    #[test]
    fn test_wrong_tag_format() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new().with_output("git describe", "v1.0.0\n");

        let err = command()
            .prepare(&ReleaseConfig::default(), &runner, temp.path(), &cli())
            .unwrap_err();

        assert_eq!(
            output::error_kind(&err),
            Some(mcp_release_core::ErrorKind::Format)
        );
    }

    #[test]
    fn test_missing_notes() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new().with_output("git describe", "infobip-openapi-mcp-1.0.0\n");

        let err = command()
            .prepare(&ReleaseConfig::default(), &runner, temp.path(), &cli())
            .unwrap_err();

        assert_eq!(
            output::error_kind(&err),
            Some(mcp_release_core::ErrorKind::NotFound)
        );
    }

    #[test]
    fn test_missing_token() {
        let cli = Cli::try_parse_from(["mcp-release", "publish", "--token", ""]).unwrap();
        let crate::cli::Commands::Publish(ref cmd) = cli.command else {
            panic!("expected publish command");
        };

        let err = cmd.execute(&cli).unwrap_err();
        assert_eq!(
            output::error_kind(&err),
            Some(mcp_release_core::ErrorKind::Configuration)
        );
    }
}
