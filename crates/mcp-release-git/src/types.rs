//! Git types

use serde::{Deserialize, Serialize};

use crate::tags::parse_version_from_tag;
use crate::repository::Result;

/// A release tag and the version it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Version with the tag prefix removed
    pub version: String,
}

impl TagInfo {
    /// Parse a tag of the form `<prefix><version>`
    pub fn parse(name: impl Into<String>, prefix: &str) -> Result<Self> {
        let name = name.into();
        let version = parse_version_from_tag(&name, prefix)?;
        Ok(Self { name, version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_info() {
        let tag = TagInfo::parse("infobip-openapi-mcp-1.0.0", "infobip-openapi-mcp-").unwrap();
        assert_eq!(tag.name, "infobip-openapi-mcp-1.0.0");
        assert_eq!(tag.version, "1.0.0");
    }
}
