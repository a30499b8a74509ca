//! Docs command

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::info;

use mcp_release_adapters::{DocsReport, DocsRewriter};
use mcp_release_core::config::render_template;
use mcp_release_core::error::AdapterError;
use mcp_release_core::{CommandRunner, CommitOutcome, FileUpdate, ReleaseConfig, SystemRunner};
use mcp_release_git::GitRepo;

use super::ReleaseVersionArgs;
use crate::cli::{output, Cli, OutputFormat};

/// Update starter version references in docs and examples
#[derive(Debug, Args)]
pub struct DocsCommand {
    /// README file (defaults to the configured README)
    #[arg(value_name = "README")]
    pub readme: Option<PathBuf>,

    #[command(flatten)]
    pub release: ReleaseVersionArgs,

    /// Leave changed files uncommitted
    #[arg(long)]
    pub no_commit: bool,
}

/// Result of the docs command
#[derive(Debug, Serialize)]
struct DocsCommandReport {
    version: String,
    #[serde(flatten)]
    docs: DocsReport,
    commit: CommitOutcome,
}

impl DocsCommand {
    /// Execute the docs command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(readme = ?self.readme, no_commit = self.no_commit, "executing docs command");
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
    ) -> anyhow::Result<DocsCommandReport> {
        let readme = root.join(self.readme.as_ref().unwrap_or(&config.docs.readme));

        // Missing README is reported before Maven is invoked
        if !readme.is_file() {
            return Err(AdapterError::ManifestNotFound(readme).into());
        }

        let version = self.release.resolve(config, runner, root)?;
        let docs = DocsRewriter::from_config(root, config)?.update_all(&readme, &version)?;

        let changed = docs.changed_paths();
        let commit = if self.no_commit {
            CommitOutcome::Skipped
        } else if changed.is_empty() {
            CommitOutcome::NoChanges
        } else {
            let message = render_template(&config.docs.commit_message, &version);
            GitRepo::new(runner).commit_if_changed(&changed, &message)?
        };

        Ok(DocsCommandReport {
            version,
            docs,
            commit,
        })
    }

    fn output_result(&self, report: &DocsCommandReport, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(report)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }

                output::info(&format!(
                    "Updating version references to {}",
                    output::version_style().apply_to(&report.version)
                ));
                if report.docs.manifests.is_empty() {
                    output::info("No example pom.xml files found");
                }

                for file in report.docs.files() {
                    let path = output::path_style().apply_to(file.path.display());
                    match file.update {
                        FileUpdate::Changed => output::success(&format!("Updated {}", path)),
                        FileUpdate::Unchanged => {
                            output::info(&format!("No version updates needed in {}", path))
                        }
                        FileUpdate::Missing => {
                            output::warning(&format!("File not found at {}, skipped", path))
                        }
                    }
                }

                match &report.commit {
                    CommitOutcome::Committed { message } => output::success(&format!(
                        "Committed {} file(s): {}",
                        report.docs.changed_paths().len(),
                        message
                    )),
                    CommitOutcome::NoChanges => output::info("No files were modified."),
                    CommitOutcome::Skipped => output::info("Skipped commit (--no-commit)"),
                }
            }
        }
        Ok(())
    }
}
