//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::ReleaseConfig;

/// Validate configuration
pub fn validate_config(config: &ReleaseConfig) -> Result<()> {
    debug!("validating configuration");
    validate_project(config)?;
    validate_versioning(config)?;
    validate_templates(config)?;
    validate_github(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn validate_project(config: &ReleaseConfig) -> Result<()> {
    if config.project.artifact_id.trim().is_empty() {
        return Err(invalid("project.artifact_id", "artifact id cannot be empty").into());
    }

    if config.project.group_id.trim().is_empty() {
        return Err(invalid("project.group_id", "group id cannot be empty").into());
    }

    Ok(())
}

fn validate_versioning(config: &ReleaseConfig) -> Result<()> {
    if config.versioning.build_command.trim().is_empty() {
        return Err(invalid("versioning.build_command", "build command cannot be empty").into());
    }

    if config.versioning.tag_prefix.is_empty() {
        return Err(invalid("versioning.tag_prefix", "tag prefix cannot be empty").into());
    }

    Ok(())
}

fn validate_templates(config: &ReleaseConfig) -> Result<()> {
    if !config.changelog.commit_message.contains("{version}") {
        return Err(invalid(
            "changelog.commit_message",
            "must contain {version} placeholder",
        )
        .into());
    }

    if !config.docs.commit_message.contains("{version}") {
        return Err(invalid("docs.commit_message", "must contain {version} placeholder").into());
    }

    Ok(())
}

fn validate_github(config: &ReleaseConfig) -> Result<()> {
    if config.github.owner.is_empty() || config.github.repo.is_empty() {
        return Err(invalid("github", "owner and repo cannot be empty").into());
    }

    if !config.github.api_url.starts_with("http://") && !config.github.api_url.starts_with("https://")
    {
        return Err(invalid("github.api_url", "must be an http(s) URL").into());
    }

    Ok(())
}
