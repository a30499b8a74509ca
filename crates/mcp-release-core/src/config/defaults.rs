//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "mcp-release.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "mcp-release.yaml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".mcp-release.toml";

/// Default changelog path
pub const DEFAULT_CHANGELOG: &str = "./CHANGELOG.md";

/// Default release notes path
pub const DEFAULT_NOTES_FILE: &str = "./release_notes.md";

/// Default documentation file
pub const DEFAULT_README: &str = "./README.md";

/// Default glob for example build descriptors
pub const DEFAULT_EXAMPLE_MANIFESTS: &str = "examples/*/pom.xml";

/// Default GitHub REST API base URL
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Config file names in lookup priority order
pub const CONFIG_FILE_NAMES: [&str; 3] = [DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML, ALT_CONFIG_FILE];
