//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::CONFIG_FILE_NAMES;
use super::types::ReleaseConfig;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: ReleaseConfig = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Paths checked in one directory, highest priority first
fn candidates(dir: &Path) -> impl Iterator<Item = PathBuf> + '_ {
    CONFIG_FILE_NAMES
        .iter()
        .flat_map(move |name| [dir.join(name), dir.join(".github").join(name)])
}

/// Nearest config file at or above `start_dir`.
///
/// A release is usually cut from the repository root, but the commands
/// may also run from a module such as `examples/basic`; the closest
/// directory holding a config file wins. Within one directory each name is
/// checked at the top level before `.github/`.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir
        .ancestors()
        .flat_map(candidates)
        .find(|path| path.is_file());

    match &found {
        Some(path) => info!(path = %path.display(), "found config file"),
        None => debug!(start_dir = %start_dir.display(), "no config file found"),
    }
    found
}

/// Load the configuration found from `dir`, or defaults when there is none.
///
/// A config file that exists but fails to parse or validate is an error.
pub fn load_config_or_default(dir: &Path) -> Result<(ReleaseConfig, Option<PathBuf>)> {
    match find_config(dir) {
        Some(path) => {
            let config = load_config(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            debug!(dir = %dir.display(), "no config found, using defaults");
            Ok((ReleaseConfig::default(), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_github_dir_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".github").join("mcp-release.yaml");
        write(
            &path,
            "github:\n  owner: octo\n  repo: openapi-mcp-fork\nchangelog:\n  include_date: true\n",
        );

        let (config, found) = load_config_or_default(temp.path()).unwrap();

        assert_eq!(found, Some(path));
        assert_eq!(config.github.owner, "octo");
        assert_eq!(config.github.repo, "openapi-mcp-fork");
        assert!(config.changelog.include_date);
        assert_eq!(config.changelog.notes_file, PathBuf::from("./release_notes.md"));
    }

    #[test]
    fn test_found_from_example_module() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mcp-release.toml");
        write(&path, "[versioning]\ntag_prefix = \"starter-\"\n");
        let module = temp.path().join("examples").join("basic");
        std::fs::create_dir_all(&module).unwrap();

        let (config, found) = load_config_or_default(&module).unwrap();

        assert_eq!(found, Some(path));
        assert_eq!(config.versioning.tag_prefix, "starter-");
    }

    #[test]
    fn test_nearest_directory_wins() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("mcp-release.toml"), "[github]\nowner = \"root\"\n");
        let module = temp.path().join("examples").join("basic");
        let nested = module.join(".github").join("mcp-release.toml");
        write(&nested, "[github]\nowner = \"module\"\n");

        assert_eq!(find_config(&module), Some(nested));
    }

    #[test]
    fn test_top_level_toml_beats_github_dir() {
        let temp = TempDir::new().unwrap();
        let top = temp.path().join("mcp-release.toml");
        write(&top, "[docs]\nreadme = \"docs/README.md\"\n");
        write(
            &temp.path().join(".github").join("mcp-release.toml"),
            "[docs]\nreadme = \"README.md\"\n",
        );
        write(&temp.path().join("mcp-release.yaml"), "docs:\n  readme: other.md\n");

        let (config, found) = load_config_or_default(temp.path()).unwrap();

        assert_eq!(found, Some(top));
        assert_eq!(config.docs.readme, PathBuf::from("docs/README.md"));
    }

    #[test]
    fn test_directory_named_like_config_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("mcp-release.toml")).unwrap();

        let (config, found) = load_config_or_default(temp.path()).unwrap();

        assert!(found.is_none());
        assert_eq!(config.github.repo, "infobip-openapi-mcp");
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let temp = TempDir::new().unwrap();
        write(
            &temp.path().join("mcp-release.toml"),
            "[docs]\ncommit_message = \"Bump docs\"\n",
        );

        let err = load_config_or_default(temp.path()).unwrap_err();
        assert!(matches!(err, crate::ReleaseError::Config(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_toml() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("mcp-release.toml"), "[changelog\n");

        let err = load_config_or_default(temp.path()).unwrap_err();
        assert!(matches!(err, crate::ReleaseError::Config(ConfigError::TomlError(_))));
    }
}
