//! Core types shared by the release utilities

use serde::{Deserialize, Serialize};

/// Outcome of rewriting a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileUpdate {
    /// Content changed and was written back
    Changed,
    /// No pattern matched, file left byte-identical
    Unchanged,
    /// Optional file was absent and skipped
    Missing,
}

impl FileUpdate {
    /// Returns the string representation of the outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
            Self::Missing => "missing",
        }
    }

    /// Whether the file should be staged for commit
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

impl std::fmt::Display for FileUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a commit-if-changed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CommitOutcome {
    /// Changes were staged and committed
    Committed { message: String },
    /// Git reported no difference for the paths
    NoChanges,
    /// Committing was disabled for this run
    Skipped,
}

impl CommitOutcome {
    /// Whether a commit was created
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_update_display() {
        assert_eq!(FileUpdate::Changed.to_string(), "changed");
        assert_eq!(FileUpdate::Unchanged.to_string(), "unchanged");
        assert!(FileUpdate::Changed.is_changed());
        assert!(!FileUpdate::Missing.is_changed());
    }

    #[test]
    fn test_commit_outcome() {
        let outcome = CommitOutcome::Committed {
            message: "Update changelog for release 1.0.0".to_string(),
        };
        assert!(outcome.is_committed());
        assert!(!CommitOutcome::NoChanges.is_committed());
    }
}
