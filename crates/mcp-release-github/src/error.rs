//! Publishing error types

use mcp_release_core::ErrorKind;
use thiserror::Error;

/// Release publishing errors
#[derive(Debug, Error)]
pub enum PublishError {
    /// No API token was supplied
    #[error("GITHUB_TOKEN environment variable is required")]
    MissingToken,

    /// Request never produced a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("HTTP Error {status}: {reason}\nResponse: {body}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// Success response without the expected fields
    #[error("Unexpected response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

impl PublishError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingToken => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } | Self::InvalidResponse { .. } => ErrorKind::Api,
        }
    }
}

/// Result type for publishing operations
pub type Result<T> = std::result::Result<T, PublishError>;
