//! Release host trait

use crate::error::Result;
use crate::types::{CreateReleaseRequest, CreatedRelease};

/// Service that hosts releases
///
/// One call per release. Implementations make a single attempt and
/// report failures without retrying.
#[async_trait::async_trait]
pub trait ReleaseHost: Send + Sync {
    /// Get the host name
    fn name(&self) -> &str;

    /// `owner/repo` the releases are created in
    fn repository(&self) -> String;

    /// Create a release
    async fn create_release(&self, request: &CreateReleaseRequest) -> Result<CreatedRelease>;
}
