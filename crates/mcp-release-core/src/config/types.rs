//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Main configuration for the release utilities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Published artifact coordinates
    pub project: ProjectConfig,

    /// Version resolution and tag format
    pub versioning: VersioningConfig,

    /// Changelog splitting
    pub changelog: ChangelogConfig,

    /// Documentation version rewriting
    pub docs: DocsConfig,

    /// GitHub release publishing
    pub github: GitHubConfig,
}

/// Artifact whose version references are rewritten
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Maven group ID
    pub group_id: String,

    /// Maven artifact ID
    pub artifact_id: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            group_id: "com.infobip.openapi.mcp".to_string(),
            artifact_id: "infobip-openapi-mcp-spring-boot-starter".to_string(),
        }
    }
}

/// Versioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Build tool executable
    pub build_command: String,

    /// Prefer `./mvnw` when present in the project root
    pub prefer_wrapper: bool,

    /// Pre-release suffix stripped from the build tool version
    pub snapshot_suffix: String,

    /// Literal prefix of release tags (e.g. "infobip-openapi-mcp-")
    pub tag_prefix: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            build_command: "mvn".to_string(),
            prefer_wrapper: true,
            snapshot_suffix: "-SNAPSHOT".to_string(),
            tag_prefix: "infobip-openapi-mcp-".to_string(),
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,

    /// Extracted release notes path
    pub notes_file: PathBuf,

    /// Append the UTC release date to the new heading
    pub include_date: bool,

    /// Commit message template
    pub commit_message: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(defaults::DEFAULT_CHANGELOG),
            notes_file: PathBuf::from(defaults::DEFAULT_NOTES_FILE),
            include_date: false,
            commit_message: "Update changelog for release {version}".to_string(),
        }
    }
}

/// Documentation rewriting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Primary documentation file
    pub readme: PathBuf,

    /// Glob for example build descriptors, relative to the project root
    pub example_manifests: String,

    /// Commit message template
    pub commit_message: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from(defaults::DEFAULT_README),
            example_manifests: defaults::DEFAULT_EXAMPLE_MANIFESTS.to_string(),
            commit_message: "Update version references to {version}".to_string(),
        }
    }
}

/// GitHub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// REST API base URL
    pub api_url: String,

    /// Value of the X-GitHub-Api-Version header
    pub api_version: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            owner: "infobip".to_string(),
            repo: "infobip-openapi-mcp".to_string(),
            api_url: defaults::DEFAULT_GITHUB_API_URL.to_string(),
            api_version: "2022-11-28".to_string(),
        }
    }
}

/// Render a `{version}` message template
pub fn render_template(template: &str, version: &str) -> String {
    template.replace("{version}", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_release_pipeline() {
        let config = ReleaseConfig::default();
        assert_eq!(config.versioning.snapshot_suffix, "-SNAPSHOT");
        assert_eq!(config.versioning.tag_prefix, "infobip-openapi-mcp-");
        assert_eq!(config.changelog.file, PathBuf::from("./CHANGELOG.md"));
        assert_eq!(config.changelog.notes_file, PathBuf::from("./release_notes.md"));
        assert_eq!(config.docs.example_manifests, "examples/*/pom.xml");
        assert_eq!(config.github.owner, "infobip");
        assert_eq!(config.github.repo, "infobip-openapi-mcp");
    }

    #[test]
    fn test_render_template() {
        assert_eq!(
            render_template("Update changelog for release {version}", "1.2.0"),
            "Update changelog for release 1.2.0"
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ReleaseConfig =
            toml::from_str("[github]\nowner = \"octo\"\n").unwrap();
        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.github.repo, "infobip-openapi-mcp");
        assert_eq!(config.project.artifact_id, "infobip-openapi-mcp-spring-boot-starter");
    }
}
