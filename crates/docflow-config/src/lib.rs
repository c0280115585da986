//! Configuration management for DocFlow.
//!
//! Parses `docflow.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `wiki.base_url`
//! - `wiki.external_url`
//! - `wiki.token`
//!
//! A typical deployment keeps the secrets in the environment:
//!
//! ```toml
//! [wiki]
//! base_url = "${WIKIJS_URL}"
//! external_url = "${WIKIJS_EXTERNAL_URL:-}"
//! token = "${WIKIJS_TOKEN}"
//! ```

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docflow.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wiki.js connection configuration (optional section).
    pub wiki: Option<WikiConfig>,
    /// Document converter configuration.
    pub converter: ConverterConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Wiki.js connection configuration.
#[derive(Debug, Deserialize)]
pub struct WikiConfig {
    /// Wiki.js API base URL.
    pub base_url: String,
    /// User-facing base URL for published-page links. Falls back to
    /// `base_url` when empty or absent.
    #[serde(default)]
    pub external_url: Option<String>,
    /// Wiki.js API bearer token.
    pub token: String,
}

impl WikiConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a field is empty or has an
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "wiki.base_url")?;
        require_http_url(&self.base_url, "wiki.base_url")?;
        require_non_empty(&self.token, "wiki.token")?;
        if let Some(external_url) = self.external_url.as_deref()
            && !external_url.is_empty()
        {
            require_http_url(external_url, "wiki.external_url")?;
        }
        Ok(())
    }

    /// The user-facing base URL, when one is configured.
    #[must_use]
    pub fn external_url(&self) -> Option<&str> {
        self.external_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Document converter configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Pandoc binary to invoke.
    pub pandoc: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            pandoc: "pandoc".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`wiki.token`").
        field: String,
        /// Error message (e.g., "${`WIKIJS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docflow.toml` in the current directory and parents,
    /// falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or
    /// parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Get validated wiki configuration.
    ///
    /// Use this instead of accessing the `wiki` field directly when the
    /// command requires the wiki: it turns a missing or half-filled
    /// `[wiki]` section into a configuration error before any network call
    /// is attempted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or
    /// invalid.
    pub fn require_wiki(&self) -> Result<&WikiConfig, ConfigError> {
        let wiki = self.wiki.as_ref().ok_or_else(|| {
            ConfigError::Validation("[wiki] section required in config".to_owned())
        })?;
        wiki.validate()?;
        Ok(wiki)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut wiki) = self.wiki {
            wiki.base_url = expand::expand_env(&wiki.base_url, "wiki.base_url")?;
            wiki.token = expand::expand_env(&wiki.token, "wiki.token")?;
            if let Some(ref external_url) = wiki.external_url {
                wiki.external_url = Some(expand::expand_env(external_url, "wiki.external_url")?);
            }
        }
        Ok(())
    }
}
