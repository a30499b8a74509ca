//! Hard-coded artifact version references
//!
//! Each pattern is anchored on one artifact so only that dependency's
//! version is replaced; every other dependency in the file is left alone.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use mcp_release_core::config::ProjectConfig;
use mcp_release_core::error::{AdapterError, Result};

/// Maven group and artifact identifying the dependency to update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCoordinates {
    /// Group ID
    pub group_id: String,
    /// Artifact ID
    pub artifact_id: String,
}

impl ArtifactCoordinates {
    /// Create coordinates
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl From<&ProjectConfig> for ArtifactCoordinates {
    fn from(project: &ProjectConfig) -> Self {
        Self::new(&project.group_id, &project.artifact_id)
    }
}

/// Dependency declaration idiom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceStyle {
    /// `<artifactId>…</artifactId>` followed by `<version>…</version>`
    MavenDependency,
    /// `implementation("group:artifact:version")`
    GradleCoordinate,
}

impl ReferenceStyle {
    /// Regex with the text before the version in group 1 and after it in group 2
    fn pattern(&self, artifact: &ArtifactCoordinates) -> String {
        match self {
            Self::MavenDependency => format!(
                r"(<artifactId>{}</artifactId>\s*<version>)[^<]+(</version>)",
                regex::escape(&artifact.artifact_id)
            ),
            Self::GradleCoordinate => format!(
                r#"(implementation\("{}:{}:)[^"]+("\))"#,
                regex::escape(&artifact.group_id),
                regex::escape(&artifact.artifact_id)
            ),
        }
    }
}

/// Result of applying the rules to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Rewritten content
    pub content: String,
    /// Number of reference sites matched
    pub matches: usize,
    /// Whether the content differs from the input
    pub changed: bool,
}

/// Compiled substitution rules for one artifact
#[derive(Debug, Clone)]
pub struct VersionReferences {
    rules: Vec<(ReferenceStyle, Regex)>,
}

impl VersionReferences {
    /// Compile rules for `artifact` in the given styles
    pub fn new(artifact: &ArtifactCoordinates, styles: &[ReferenceStyle]) -> Result<Self> {
        let rules = styles
            .iter()
            .map(|style| {
                let pattern = style.pattern(artifact);
                Regex::new(&pattern)
                    .map(|regex| (*style, regex))
                    .map_err(|e| AdapterError::InvalidPattern {
                        pattern,
                        reason: e.to_string(),
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Rules for documentation: Maven and Gradle snippets
    pub fn documentation(artifact: &ArtifactCoordinates) -> Result<Self> {
        Self::new(
            artifact,
            &[ReferenceStyle::MavenDependency, ReferenceStyle::GradleCoordinate],
        )
    }

    /// Rules for pom.xml build descriptors
    pub fn pom(artifact: &ArtifactCoordinates) -> Result<Self> {
        Self::new(artifact, &[ReferenceStyle::MavenDependency])
    }

    /// Replace every matched version with `version`
    #[instrument(skip(self, content), fields(len = content.len()))]
    pub fn apply(&self, content: &str, version: &str) -> Rewrite {
        let mut rewritten = content.to_string();
        let mut matches = 0;

        for (style, regex) in &self.rules {
            let mut count = 0;
            let replaced = regex.replace_all(&rewritten, |caps: &Captures| {
                count += 1;
                format!("{}{}{}", &caps[1], version, &caps[2])
            });
            let replaced = replaced.into_owned();
            debug!(?style, count, "applied version rule");
            matches += count;
            rewritten = replaced;
        }

        let changed = rewritten != content;
        Rewrite {
            content: rewritten,
            matches,
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> ArtifactCoordinates {
        ArtifactCoordinates::from(&ProjectConfig::default())
    }

    #[test]
    fn test_maven_snippet() {
        let rules = VersionReferences::documentation(&starter()).unwrap();
        let content = "<dependency>\n    <groupId>com.infobip.openapi.mcp</groupId>\n    <artifactId>infobip-openapi-mcp-spring-boot-starter</artifactId>\n    <version>2.3.0</version>\n</dependency>\n";

        let rewrite = rules.apply(content, "2.3.1");

        assert!(rewrite.changed);
        assert_eq!(rewrite.matches, 1);
        assert_eq!(
            rewrite.content,
            "<dependency>\n    <groupId>com.infobip.openapi.mcp</groupId>\n    <artifactId>infobip-openapi-mcp-spring-boot-starter</artifactId>\n    <version>2.3.1</version>\n</dependency>\n"
        );
    }

    #[test]
    fn test_gradle_snippet() {
        let rules = VersionReferences::documentation(&starter()).unwrap();
        let content = "dependencies {\n    implementation(\"com.infobip.openapi.mcp:infobip-openapi-mcp-spring-boot-starter:0.1.0\")\n    implementation(\"org.example:other:0.1.0\")\n}\n";

        let rewrite = rules.apply(content, "0.2.0");

        assert_eq!(
            rewrite.content,
            "dependencies {\n    implementation(\"com.infobip.openapi.mcp:infobip-openapi-mcp-spring-boot-starter:0.2.0\")\n    implementation(\"org.example:other:0.1.0\")\n}\n"
        );
    }

    #[test]
    fn test_all_sites_replaced() {
        let rules = VersionReferences::pom(&starter()).unwrap();
        let site = "<artifactId>infobip-openapi-mcp-spring-boot-starter</artifactId><version>0.1.0</version>";
        let content = format!("{site}\n{site}\n");

        let rewrite = rules.apply(&content, "0.2.0");
        assert_eq!(rewrite.matches, 2);
        assert!(!rewrite.content.contains("0.1.0"));
    }

    #[test]
    fn test_other_dependencies_untouched() {
        let rules = VersionReferences::pom(&starter()).unwrap();
        let content = "<artifactId>spring-boot-starter-web</artifactId>\n<version>3.4.0</version>\n<artifactId>infobip-openapi-mcp-core</artifactId>\n<version>0.1.0</version>\n";

        let rewrite = rules.apply(content, "9.9.9");

        assert!(!rewrite.changed);
        assert_eq!(rewrite.matches, 0);
        assert_eq!(rewrite.content, content);
    }

    #[test]
    fn test_pom_rules_skip_gradle() {
        let rules = VersionReferences::pom(&starter()).unwrap();
        let content = "implementation(\"com.infobip.openapi.mcp:infobip-openapi-mcp-spring-boot-starter:0.1.0\")\n";

        let rewrite = rules.apply(content, "0.2.0");
        assert!(!rewrite.changed);
        assert_eq!(rewrite.matches, 0);
    }

    #[test]
    fn test_same_version_is_unchanged() {
        let rules = VersionReferences::pom(&starter()).unwrap();
        let content = "<artifactId>infobip-openapi-mcp-spring-boot-starter</artifactId>\n<version>1.0.0</version>\n";

        let rewrite = rules.apply(content, "1.0.0");
        assert_eq!(rewrite.matches, 1);
        assert!(!rewrite.changed);
    }

    #[test]
    fn test_version_with_dollar_sign_is_literal() {
        let rules = VersionReferences::pom(&starter()).unwrap();
        let content = "<artifactId>infobip-openapi-mcp-spring-boot-starter</artifactId><version>1</version>";

        let rewrite = rules.apply(content, "$1");
        assert!(rewrite.content.contains("<version>$1</version>"));
    }

    #[test]
    fn test_artifact_name_is_escaped() {
        let artifact = ArtifactCoordinates::new("com.example", "lib.core");
        let rules = VersionReferences::pom(&artifact).unwrap();
        let content = "<artifactId>libXcore</artifactId><version>1</version>";

        assert!(!rules.apply(content, "2").changed);
    }
}
