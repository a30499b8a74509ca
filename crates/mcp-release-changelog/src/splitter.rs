//! Changelog splitting workflow
//!
//! Reads the changelog once, writes the unreleased section to the notes file
//! and opens a new release section in the changelog. A notes file written by
//! a failed run is removed so later pipeline stages never see stale notes.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use mcp_release_core::error::ChangelogError;

use crate::types::ReleaseHeading;
use crate::unreleased::{extract_unreleased, insert_release_heading, UNRELEASED_HEADING};

/// Result type for changelog operations
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Result of a successful split
#[derive(Debug, Clone, Serialize)]
pub struct SplitOutcome {
    /// Where the notes were written
    pub notes_path: PathBuf,
    /// Extracted release notes
    pub notes: String,
    /// Heading line inserted into the changelog
    pub heading: String,
}

/// Splits the unreleased section out of a changelog
#[derive(Debug, Clone)]
pub struct ChangelogSplitter {
    changelog: PathBuf,
    notes: PathBuf,
}

impl ChangelogSplitter {
    /// Create a splitter for `changelog` writing notes to `notes`
    pub fn new(changelog: impl Into<PathBuf>, notes: impl Into<PathBuf>) -> Self {
        Self {
            changelog: changelog.into(),
            notes: notes.into(),
        }
    }

    /// Changelog path
    pub fn changelog_path(&self) -> &Path {
        &self.changelog
    }

    /// Release notes path
    pub fn notes_path(&self) -> &Path {
        &self.notes
    }

    /// Fail early when the changelog is not a file
    pub fn ensure_changelog(&self) -> Result<()> {
        if self.changelog.is_file() {
            Ok(())
        } else {
            Err(ChangelogError::FileNotFound(self.changelog.clone()))
        }
    }

    /// Write the unreleased section to the notes file and open `heading`
    #[instrument(skip(self), fields(changelog = %self.changelog.display(), notes = %self.notes.display()))]
    pub fn split(&self, heading: &ReleaseHeading) -> Result<SplitOutcome> {
        let content = self.read_changelog()?;

        let notes = extract_unreleased(&content).ok_or_else(|| ChangelogError::SectionNotFound {
            path: self.changelog.clone(),
            heading: UNRELEASED_HEADING.to_string(),
        })?;

        let heading_line = heading.to_line();
        let result = self
            .write_notes(&notes)
            .and_then(|()| self.rewrite_changelog(&content, &heading_line));

        if let Err(e) = result {
            self.remove_notes();
            return Err(e);
        }

        info!(heading = %heading_line, notes_bytes = notes.len(), "split changelog");
        Ok(SplitOutcome {
            notes_path: self.notes.clone(),
            notes,
            heading: heading_line,
        })
    }

    fn read_changelog(&self) -> Result<String> {
        std::fs::read_to_string(&self.changelog).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => ChangelogError::FileNotFound(self.changelog.clone()),
            _ => ChangelogError::Io(e),
        })
    }

    fn write_notes(&self, notes: &str) -> Result<()> {
        if let Some(parent) = self.notes.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ChangelogError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.notes, notes).map_err(|source| ChangelogError::WriteFailed {
            path: self.notes.clone(),
            source,
        })?;
        debug!(path = %self.notes.display(), "wrote release notes");
        Ok(())
    }

    fn rewrite_changelog(&self, content: &str, heading_line: &str) -> Result<()> {
        let updated = insert_release_heading(content, heading_line).ok_or_else(|| {
            ChangelogError::HeadingNotFound {
                path: self.changelog.clone(),
                heading: UNRELEASED_HEADING.to_string(),
            }
        })?;

        std::fs::write(&self.changelog, updated).map_err(|source| ChangelogError::WriteFailed {
            path: self.changelog.clone(),
            source,
        })?;
        debug!(path = %self.changelog.display(), "rewrote changelog");
        Ok(())
    }

    fn remove_notes(&self) {
        match std::fs::remove_file(&self.notes) {
            Ok(()) => debug!(path = %self.notes.display(), "removed partial release notes"),
            Err(e) if e.kind() == IoErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.notes.display(), error = %e, "failed to remove release notes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_release_core::error::ErrorKind;
    use tempfile::TempDir;

    const CHANGELOG: &str = "# Changelog\n\n## [Unreleased]\n\n- Added tool filtering\n\n## 0.1.0\n\n- Initial release\n";

    fn setup(content: &str) -> (TempDir, ChangelogSplitter) {
        let temp = TempDir::new().unwrap();
        let changelog = temp.path().join("CHANGELOG.md");
        std::fs::write(&changelog, content).unwrap();
        let splitter = ChangelogSplitter::new(changelog, temp.path().join("release_notes.md"));
        (temp, splitter)
    }

    #[test]
    fn test_split() {
        let (_temp, splitter) = setup(CHANGELOG);

        let outcome = splitter.split(&ReleaseHeading::new("0.2.0")).unwrap();

        assert_eq!(outcome.notes, "\n- Added tool filtering\n\n");
        assert_eq!(outcome.heading, "## 0.2.0");
        assert_eq!(
            std::fs::read_to_string(splitter.notes_path()).unwrap(),
            "\n- Added tool filtering\n\n"
        );
        assert_eq!(
            std::fs::read_to_string(splitter.changelog_path()).unwrap(),
            "# Changelog\n\n## [Unreleased]\n\n## 0.2.0\n\n- Added tool filtering\n\n## 0.1.0\n\n- Initial release\n"
        );
    }

    #[test]
    fn test_split_creates_notes_directory() {
        let temp = TempDir::new().unwrap();
        let changelog = temp.path().join("CHANGELOG.md");
        std::fs::write(&changelog, CHANGELOG).unwrap();
        let notes = temp.path().join("target").join("release_notes.md");

        let splitter = ChangelogSplitter::new(&changelog, &notes);
        splitter.split(&ReleaseHeading::new("0.2.0")).unwrap();

        assert!(notes.is_file());
    }

    #[test]
    fn test_missing_section_writes_nothing() {
        let content = "# Changelog\n\n## 0.1.0\n- Initial release\n";
        let (_temp, splitter) = setup(content);

        let err = splitter.split(&ReleaseHeading::new("0.2.0")).unwrap_err();

        assert!(matches!(err, ChangelogError::SectionNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!splitter.notes_path().exists());
        assert_eq!(std::fs::read_to_string(splitter.changelog_path()).unwrap(), content);
    }

    #[test]
    fn test_inexact_heading_removes_notes() {
        let content = "## [Unreleased] \n- Added tool filtering\n";
        let (_temp, splitter) = setup(content);

        let err = splitter.split(&ReleaseHeading::new("0.2.0")).unwrap_err();

        assert!(matches!(err, ChangelogError::HeadingNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!splitter.notes_path().exists());
        assert_eq!(std::fs::read_to_string(splitter.changelog_path()).unwrap(), content);
    }

    #[test]
    fn test_missing_changelog() {
        let temp = TempDir::new().unwrap();
        let splitter = ChangelogSplitter::new(
            temp.path().join("CHANGELOG.md"),
            temp.path().join("release_notes.md"),
        );

        assert!(matches!(
            splitter.ensure_changelog(),
            Err(ChangelogError::FileNotFound(_))
        ));
        assert!(matches!(
            splitter.split(&ReleaseHeading::new("1.0.0")),
            Err(ChangelogError::FileNotFound(_))
        ));
    }
}
