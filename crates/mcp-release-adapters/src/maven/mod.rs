//! Maven adapter
//!
//! Resolves the project version with `help:evaluate` and knows how the
//! starter artifact is referenced from Maven and Gradle builds.

mod references;

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use mcp_release_core::config::VersioningConfig;
use mcp_release_core::error::{ConfigError, Result};
use mcp_release_core::process::{display_command, CommandRunner};

pub use references::{ArtifactCoordinates, ReferenceStyle, Rewrite, VersionReferences};

/// Arguments that print the bare project version
const EVALUATE_VERSION_ARGS: [&str; 5] = [
    "-q",
    "--non-recursive",
    "help:evaluate",
    "-Dexpression=project.version",
    "-DforceStdout",
];

/// Maven adapter
#[derive(Debug, Clone)]
pub struct MavenAdapter {
    command: String,
    prefer_wrapper: bool,
    snapshot_suffix: String,
}

impl MavenAdapter {
    /// Create a new Maven adapter
    pub fn new() -> Self {
        Self::from_config(&VersioningConfig::default())
    }

    /// Create an adapter from versioning configuration
    pub fn from_config(config: &VersioningConfig) -> Self {
        Self {
            command: config.build_command.clone(),
            prefer_wrapper: config.prefer_wrapper,
            snapshot_suffix: config.snapshot_suffix.clone(),
        }
    }

    /// Get the Maven command (mvn or mvnw)
    fn maven_cmd(&self, root: &Path) -> String {
        if self.prefer_wrapper && root.join("mvnw").is_file() {
            "./mvnw".to_string()
        } else {
            self.command.clone()
        }
    }

    /// Version reported by Maven, suffix included
    #[instrument(skip(self, runner), fields(root = %root.display()))]
    pub fn project_version(&self, runner: &dyn CommandRunner, root: &Path) -> Result<String> {
        let mvn = self.maven_cmd(root);
        if !runner.is_available(&mvn) {
            return Err(ConfigError::ToolNotFound(mvn).into());
        }

        let command = display_command(&mvn, &EVALUATE_VERSION_ARGS);
        let unavailable = |reason: String| ConfigError::VersionUnavailable {
            tool: command.clone(),
            reason,
        };

        let output = runner
            .run(&mvn, &EVALUATE_VERSION_ARGS)
            .map_err(|e| unavailable(e.to_string()))?
            .check(&command)
            .map_err(|e| unavailable(e.to_string()))?;

        // Maven may print download or warning lines before the value
        let version = output
            .stdout
            .trim()
            .lines()
            .last()
            .unwrap_or_default()
            .trim()
            .to_string();

        debug!(version = %version, "maven reported version");
        Ok(version)
    }

    /// Release version: the project version without the snapshot suffix
    pub fn release_version(&self, runner: &dyn CommandRunner, root: &Path) -> Result<String> {
        let project_version = self.project_version(runner, root)?;
        let version = project_version
            .strip_suffix(self.snapshot_suffix.as_str())
            .unwrap_or(project_version.as_str())
            .to_string();

        if version.is_empty() {
            return Err(ConfigError::EmptyVersion.into());
        }

        if semver::Version::parse(&version).is_err() {
            warn!(version = %version, "release version is not a semantic version");
        }

        Ok(version)
    }
}

impl Default for MavenAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Release version from an explicit override or, failing that, from Maven
#[instrument(skip(adapter, runner), fields(root = %root.display()))]
pub fn resolve_release_version(
    override_version: Option<&str>,
    adapter: &MavenAdapter,
    runner: &dyn CommandRunner,
    root: &Path,
) -> Result<String> {
    if let Some(version) = override_version.filter(|v| !v.is_empty()) {
        info!(version, source = "override", "resolved release version");
        return Ok(version.to_string());
    }

    let version = adapter.release_version(runner, root)?;
    info!(version = %version, source = "maven", "resolved release version");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_release_core::error::{ErrorKind, ReleaseError};
    use mcp_release_core::testing::FakeRunner;
    use tempfile::TempDir;

    const EVALUATE: &str =
        "mvn -q --non-recursive help:evaluate -Dexpression=project.version -DforceStdout";

    #[test]
    fn test_override_wins() {
        let runner = FakeRunner::new().with_unavailable("mvn");
        let version = resolve_release_version(
            Some("2.3.1"),
            &MavenAdapter::new(),
            &runner,
            Path::new("."),
        )
        .unwrap();

        assert_eq!(version, "2.3.1");
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_empty_override_falls_back_to_maven() {
        let runner = FakeRunner::new().with_output(EVALUATE, "1.4.0-SNAPSHOT");
        let version =
            resolve_release_version(Some(""), &MavenAdapter::new(), &runner, Path::new("."))
                .unwrap();

        assert_eq!(version, "1.4.0");
        assert_eq!(runner.calls(), vec![EVALUATE]);
    }

    #[test]
    fn test_takes_last_output_line() {
        let runner = FakeRunner::new().with_output(
            "mvn",
            "[WARNING] Some problems were encountered\nDownloading plugin\n1.4.0-SNAPSHOT\n",
        );
        let version = MavenAdapter::new()
            .release_version(&runner, Path::new("."))
            .unwrap();
        assert_eq!(version, "1.4.0");
    }

    #[test]
    fn test_release_version_without_suffix() {
        let runner = FakeRunner::new().with_output("mvn", "1.4.0\n");
        let version = MavenAdapter::new()
            .release_version(&runner, Path::new("."))
            .unwrap();
        assert_eq!(version, "1.4.0");
    }

    #[test]
    fn test_maven_missing() {
        let runner = FakeRunner::new().with_unavailable("mvn");
        let err = resolve_release_version(None, &MavenAdapter::new(), &runner, Path::new("."))
            .unwrap_err();

        assert!(matches!(err, ReleaseError::Config(ConfigError::ToolNotFound(_))));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_maven_fails() {
        let runner = FakeRunner::new().with_failure("mvn", 1, "[ERROR] No POM in this directory");
        let err = MavenAdapter::new()
            .release_version(&runner, Path::new("."))
            .unwrap_err();

        assert!(matches!(
            err,
            ReleaseError::Config(ConfigError::VersionUnavailable { .. })
        ));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_maven_cannot_start() {
        let runner = FakeRunner::new().with_spawn_error("mvn", "Permission denied (os error 13)");
        let err = MavenAdapter::new()
            .release_version(&runner, Path::new("."))
            .unwrap_err();

        match err {
            ReleaseError::Config(ConfigError::VersionUnavailable { tool, reason }) => {
                assert!(tool.starts_with("mvn -q"));
                assert!(reason.contains("Permission denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_version() {
        let runner = FakeRunner::new().with_output("mvn", "-SNAPSHOT\n");
        let err = MavenAdapter::new()
            .release_version(&runner, Path::new("."))
            .unwrap_err();

        assert!(matches!(err, ReleaseError::Config(ConfigError::EmptyVersion)));
    }

    #[test]
    fn test_prefers_wrapper() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("mvnw"), "#!/bin/sh\n").unwrap();

        let runner = FakeRunner::new()
            .with_unavailable("mvn")
            .with_output("./mvnw", "2.0.0-SNAPSHOT\n");
        let version = MavenAdapter::new()
            .release_version(&runner, temp.path())
            .unwrap();

        assert_eq!(version, "2.0.0");
        assert!(runner.calls()[0].starts_with("./mvnw -q"));
    }

    #[test]
    fn test_wrapper_disabled() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("mvnw"), "#!/bin/sh\n").unwrap();

        let config = VersioningConfig {
            prefer_wrapper: false,
            ..VersioningConfig::default()
        };
        let runner = FakeRunner::new().with_output("mvn", "2.0.0\n");
        MavenAdapter::from_config(&config)
            .release_version(&runner, temp.path())
            .unwrap();

        assert!(runner.calls()[0].starts_with("mvn -q"));
    }
}
