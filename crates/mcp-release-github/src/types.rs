//! Release payload types

use serde::{Deserialize, Serialize};

/// Body of a create-release request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReleaseRequest {
    /// Existing tag the release points at
    pub tag_name: String,
    /// Release title
    pub name: String,
    /// Release notes in Markdown
    pub body: String,
    /// Publish as draft
    pub draft: bool,
    /// Mark as pre-release
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    /// Published, non-prerelease release named `Release <version>`
    pub fn new(tag_name: impl Into<String>, version: &str, body: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            name: format!("Release {}", version),
            body: body.into(),
            draft: false,
            prerelease: false,
        }
    }
}

/// Release returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRelease {
    /// Release title
    pub name: String,
    /// Web page of the release
    pub html_url: String,
}
