//! Changelog command

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tracing::info;

use mcp_release_changelog::{ChangelogSplitter, ReleaseHeading, SplitOutcome};
use mcp_release_core::config::render_template;
use mcp_release_core::{CommandRunner, CommitOutcome, ReleaseConfig, SystemRunner};
use mcp_release_git::GitRepo;

use super::ReleaseVersionArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Move the unreleased changelog section into the release notes
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Changelog file (defaults to the configured changelog)
    #[arg(value_name = "CHANGELOG")]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub release: ReleaseVersionArgs,

    /// Leave the rewritten changelog uncommitted
    #[arg(long)]
    pub no_commit: bool,
}

/// Result of the changelog command
#[derive(Debug, Serialize)]
struct ChangelogReport {
    version: String,
    changelog: PathBuf,
    #[serde(flatten)]
    split: SplitOutcome,
    commit: CommitOutcome,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(path = ?self.path, no_commit = self.no_commit, "executing changelog command");
        let root = cli.root()?;
        let config = cli.load_config(&root)?;
        let runner = SystemRunner::new(&root);

        let report = self.run(&config, &runner, &root)?;
        self.output_result(&report, cli)
    }

    fn run(
        &self,
        config: &ReleaseConfig,
        runner: &dyn CommandRunner,
        root: &Path,
    ) -> anyhow::Result<ChangelogReport> {
        let changelog = root.join(self.path.as_ref().unwrap_or(&config.changelog.file));
        let splitter = ChangelogSplitter::new(&changelog, root.join(&config.changelog.notes_file));

        // Missing changelog is reported before Maven is invoked
        splitter.ensure_changelog()?;

        let version = self.release.resolve(config, runner, root)?;

        let mut heading = ReleaseHeading::new(&version);
        if config.changelog.include_date {
            heading = heading.with_date(Utc::now().date_naive());
        }

        let split = splitter.split(&heading)?;

        let commit = if self.no_commit {
            CommitOutcome::Skipped
        } else {
            let message = render_template(&config.changelog.commit_message, &version);
            GitRepo::new(runner).commit_if_changed(&[changelog.as_path()], &message)?
        };

        Ok(ChangelogReport {
            version,
            changelog,
            split,
            commit,
        })
    }

    fn output_result(&self, report: &ChangelogReport, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }

                let changelog = output::path_style().apply_to(report.changelog.display());
                output::success(&format!(
                    "Extracted release notes to {}",
                    output::path_style().apply_to(report.split.notes_path.display())
                ));
                output::success(&format!(
                    "Added '{}' to {}",
                    output::version_style().apply_to(&report.split.heading),
                    changelog
                ));

                match &report.commit {
                    CommitOutcome::Committed { message } => {
                        output::success(&format!("Committed: {}", message))
                    }
                    CommitOutcome::NoChanges => {
                        output::info(&format!("No changes detected in \"{}\" to commit.", changelog))
                    }
                    CommitOutcome::Skipped => output::info("Skipped commit (--no-commit)"),
                }
            }
        }
        Ok(())
    }
}
