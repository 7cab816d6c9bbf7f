//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.language`
//! - `content.default_language`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the working-set language.
    pub language: Option<String>,
    /// Override the draft inclusion flag.
    pub build_drafts: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Language used when neither the config file nor the CLI names one.
const DEFAULT_LANGUAGE: &str = "en";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration as written in TOML.
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    language: Option<String>,
    default_language: Option<String>,
    languages: Option<Vec<String>>,
    build_drafts: Option<bool>,
}

/// Resolved content selection policy.
///
/// Decides which pages of the raw collection make it into the working set
/// of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    /// Language of the working set.
    pub language: String,
    /// Language assigned to pages that do not declare one.
    pub default_language: String,
    /// Allowed languages. Empty means any language is accepted.
    pub languages: Vec<String>,
    /// Whether draft pages are part of the build.
    pub build_drafts: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_owned(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
            languages: Vec::new(),
            build_drafts: false,
        }
    }
}

impl ContentConfig {
    /// Check whether a page language belongs to the working set.
    ///
    /// `None` stands for the default language.
    #[must_use]
    pub fn is_current_language(&self, lang: Option<&str>) -> bool {
        lang.unwrap_or(&self.default_language) == self.language
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
        /// Config field path (e.g., "`content.language`").
        field: String,
        /// Error message (e.g., "${`SITE_LANG`} not set").
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

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values. The merged result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => std::env::current_dir()
                .ok()
                .and_then(|cwd| Self::discover_config(&cwd)),
        };

        let mut config = match discovered {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// Overrides land on the raw values and the content section is resolved
    /// again, so an unset `default_language` follows the overridden language.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(language) = &settings.language {
            self.content.language = Some(language.clone());
        }
        if let Some(build_drafts) = settings.build_drafts {
            self.content.build_drafts = Some(build_drafts);
        }
        self.resolve();
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
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
        config.resolve();
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let content = &self.content_resolved;

        require_non_empty(&content.language, "content.language")?;
        require_non_empty(&content.default_language, "content.default_language")?;

        if content.languages.is_empty() {
            return Ok(());
        }

        for (value, field) in [
            (&content.language, "content.language"),
            (&content.default_language, "content.default_language"),
        ] {
            if !content.languages.contains(value) {
                return Err(ConfigError::Validation(format!(
                    "{field} \"{value}\" is not listed in content.languages"
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref language) = self.content.language {
            self.content.language = Some(expand::expand_env(language, "content.language")?);
        }
        if let Some(ref default_language) = self.content.default_language {
            self.content.default_language = Some(expand::expand_env(
                default_language,
                "content.default_language",
            )?);
        }
        Ok(())
    }

    /// Fill in defaults for everything the file left out.
    ///
    /// `default_language` falls back to `language` so that a single-language
    /// site only has to name its language once.
    fn resolve(&mut self) {
        let raw = &self.content;
        let language = raw
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
        let default_language = raw
            .default_language
            .clone()
            .unwrap_or_else(|| language.clone());

        self.content_resolved = ContentConfig {
            language,
            default_language,
            languages: raw.languages.clone().unwrap_or_default(),
            build_drafts: raw.build_drafts.unwrap_or(false),
        };
    }
}
