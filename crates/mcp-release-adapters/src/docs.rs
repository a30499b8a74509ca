//! Documentation and example build rewriting
//!
//! The README must exist; example `pom.xml` files are optional and a missing
//! one is skipped with a warning.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use mcp_release_core::config::ReleaseConfig;
use mcp_release_core::error::{AdapterError, Result};
use mcp_release_core::FileUpdate;

use crate::maven::{ArtifactCoordinates, VersionReferences};

/// Outcome for one rewritten file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// File path
    pub path: PathBuf,
    /// What happened to it
    pub update: FileUpdate,
}

/// Outcome of a full docs update
#[derive(Debug, Clone, Default, Serialize)]
pub struct DocsReport {
    /// README report
    pub readme: Option<FileReport>,
    /// Example manifest reports, in path order
    pub manifests: Vec<FileReport>,
}

impl DocsReport {
    /// All reports, README first
    pub fn files(&self) -> impl Iterator<Item = &FileReport> {
        self.readme.iter().chain(self.manifests.iter())
    }

    /// Paths whose content was written back
    pub fn changed_paths(&self) -> Vec<&Path> {
        self.files()
            .filter(|report| report.update.is_changed())
            .map(|report| report.path.as_path())
            .collect()
    }

    /// Whether any file changed
    pub fn has_changes(&self) -> bool {
        self.files().any(|report| report.update.is_changed())
    }
}

/// Rewrites starter version references under a project root
#[derive(Debug, Clone)]
pub struct DocsRewriter {
    root: PathBuf,
    documentation: VersionReferences,
    pom: VersionReferences,
    manifest_glob: String,
}

impl DocsRewriter {
    /// Create a rewriter for `artifact`, discovering manifests with `manifest_glob`
    pub fn new(
        root: impl Into<PathBuf>,
        artifact: &ArtifactCoordinates,
        manifest_glob: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            documentation: VersionReferences::documentation(artifact)?,
            pom: VersionReferences::pom(artifact)?,
            manifest_glob: manifest_glob.into(),
        })
    }

    /// Create a rewriter from release configuration
    pub fn from_config(root: impl Into<PathBuf>, config: &ReleaseConfig) -> Result<Self> {
        Self::new(
            root,
            &ArtifactCoordinates::from(&config.project),
            config.docs.example_manifests.clone(),
        )
    }

    /// Rewrite the README; a missing README is an error
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn update_readme(&self, path: &Path, version: &str) -> Result<FileReport> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                return Err(AdapterError::ManifestNotFound(path.to_path_buf()).into())
            }
            Err(e) => return Err(update_failed(path, e).into()),
        };

        let update = self.write_rewrite(path, &content, &self.documentation, version)?;
        Ok(FileReport {
            path: path.to_path_buf(),
            update,
        })
    }

    /// Example manifests matching the configured glob, sorted
    pub fn find_example_manifests(&self) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            self.manifest_glob
        );

        let paths = glob::glob(&pattern).map_err(|e| AdapterError::InvalidGlob {
            pattern: self.manifest_glob.clone(),
            reason: e.to_string(),
        })?;

        let mut manifests: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable manifest path");
                    None
                }
            })
            .collect();
        manifests.sort();

        debug!(count = manifests.len(), pattern = %self.manifest_glob, "found example manifests");
        Ok(manifests)
    }

    /// Rewrite one example manifest; a missing file is skipped
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn update_manifest(&self, path: &Path, version: &str) -> Result<FileReport> {
        let update = match std::fs::read_to_string(path) {
            Ok(content) => self.write_rewrite(path, &content, &self.pom, version)?,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                warn!(path = %path.display(), "example manifest not found, skipping");
                FileUpdate::Missing
            }
            Err(e) => return Err(update_failed(path, e).into()),
        };

        Ok(FileReport {
            path: path.to_path_buf(),
            update,
        })
    }

    /// Rewrite the README and every example manifest
    pub fn update_all(&self, readme: &Path, version: &str) -> Result<DocsReport> {
        let readme = self.update_readme(readme, version)?;

        let manifests = self
            .find_example_manifests()?
            .iter()
            .map(|path| self.update_manifest(path, version))
            .collect::<Result<Vec<_>>>()?;

        let report = DocsReport {
            readme: Some(readme),
            manifests,
        };
        info!(
            changed = report.changed_paths().len(),
            manifests = report.manifests.len(),
            "updated version references"
        );
        Ok(report)
    }

    fn write_rewrite(
        &self,
        path: &Path,
        content: &str,
        rules: &VersionReferences,
        version: &str,
    ) -> Result<FileUpdate> {
        let rewrite = rules.apply(content, version);
        if !rewrite.changed {
            debug!(matches = rewrite.matches, "no version change");
            return Ok(FileUpdate::Unchanged);
        }

        std::fs::write(path, rewrite.content).map_err(|e| update_failed(path, e))?;
        debug!(matches = rewrite.matches, "rewrote version references");
        Ok(FileUpdate::Changed)
    }
}

fn update_failed(path: &Path, source: std::io::Error) -> AdapterError {
    AdapterError::UpdateFailed {
        path: path.to_path_buf(),
        source,
    }
}
