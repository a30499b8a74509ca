//! Changelog types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::unreleased::HEADING_PREFIX;

/// Heading that opens the section of a new release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseHeading {
    /// Release version
    pub version: String,
    /// Release date, rendered as `YYYY-MM-DD` when present
    pub date: Option<NaiveDate>,
}

impl ReleaseHeading {
    /// Heading carrying only the version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: None,
        }
    }

    /// Add a release date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Heading line without terminator
    pub fn to_line(&self) -> String {
        match self.date {
            Some(date) => format!(
                "{}{} - {}",
                HEADING_PREFIX,
                self.version,
                date.format("%Y-%m-%d")
            ),
            None => format!("{}{}", HEADING_PREFIX, self.version),
        }
    }
}

impl std::fmt::Display for ReleaseHeading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_heading() {
        assert_eq!(ReleaseHeading::new("1.2.0").to_line(), "## 1.2.0");
    }

    #[test]
    fn test_dated_heading() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let heading = ReleaseHeading::new("1.2.0").with_date(date);
        assert_eq!(heading.to_string(), "## 1.2.0 - 2026-10-17");
    }
}
