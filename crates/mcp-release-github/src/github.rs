//! GitHub Releases integration
//!
//! ## Authentication
//!
//! Uses a personal access or workflow token sent as `Authorization: Bearer`.
//! The token is handed in by the caller; this module never reads the
//! environment.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use tracing::{debug, info, instrument};

use mcp_release_core::config::GitHubConfig;

use crate::error::{PublishError, Result};
use crate::traits::ReleaseHost;
use crate::types::{CreateReleaseRequest, CreatedRelease};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub Releases client
pub struct GitHubReleases {
    config: GitHubConfig,
    token: String,
    client: Client,
}

impl GitHubReleases {
    /// Create a client; an empty token is rejected
    pub fn new(config: &GitHubConfig, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(PublishError::MissingToken);
        }

        Ok(Self {
            config: config.clone(),
            token,
            client: Client::new(),
        })
    }

    /// Endpoint that creates releases
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.config.api_url.trim_end_matches('/'),
            self.config.owner,
            self.config.repo
        )
    }
}

#[async_trait]
impl ReleaseHost for GitHubReleases {
    fn name(&self) -> &str {
        "GitHub"
    }

    fn repository(&self) -> String {
        format!("{}/{}", self.config.owner, self.config.repo)
    }

    #[instrument(skip(self, request), fields(tag = %request.tag_name))]
    async fn create_release(&self, request: &CreateReleaseRequest) -> Result<CreatedRelease> {
        let url = self.releases_url();
        debug!(url = %url, "creating release");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(API_VERSION_HEADER, &self.config.api_version)
            .header(USER_AGENT, concat!("mcp-release/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(PublishError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let body = response.text().await?;
        let release: CreatedRelease =
            serde_json::from_str(&body).map_err(|e| PublishError::InvalidResponse {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        info!(name = %release.name, url = %release.html_url, "created release");
        Ok(release)
    }
}

/// Error response body, or a marker saying why it could not be read
fn error_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
