//! Configuration management for sitetree.
//!
//! Parses `sitetree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Programmatic overrides can be applied during load via [`Overrides`].
//!
//! ## Example
//!
//! ```toml
//! [source]
//! dir = "content"
//! extensions = ["md", "txt"]
//! include_hidden = false
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Every string value (`source.dir` and each `source.extensions` entry)
//! supports `${VAR}` and `${VAR:-default}` expansion.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the extension filter.
    pub extensions: Option<Vec<String>>,
    /// Override the hidden file policy.
    pub include_hidden: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitetree.toml";

/// Default source directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "content";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration (paths are relative strings from TOML).
    source: SourceConfigRaw,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source_resolved: SourceConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SourceConfigRaw {
    dir: Option<String>,
    extensions: Option<Vec<String>>,
    include_hidden: Option<bool>,
}

/// Resolved source configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Directory whose files become resources.
    pub dir: PathBuf,
    /// Lowercase extensions (without dot) to include. Empty means all files.
    pub extensions: Vec<String>,
    /// Whether dotfiles and dot-directories are included.
    pub include_hidden: bool,
}

impl SourceConfig {
    /// Check whether a file passes the extension filter.
    #[must_use]
    pub fn allows_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
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
        /// Config field path (e.g., "`source.dir`").
        field: String,
        /// Error message (e.g., "${`CONTENT_DIR`} not set").
        message: String,
    },
}

/// Normalize an extension: strip one leading dot, lowercase.
fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitetree.toml` in current directory and parents,
    /// falling back to defaults relative to the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration (file plus overrides) is invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
        }

        config.validate()?;

        tracing::debug!(
            config_path = ?config.config_path,
            source_dir = %config.source_resolved.dir.display(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(source_dir) = &overrides.source_dir {
            self.source_resolved.dir.clone_from(source_dir);
        }
        if let Some(extensions) = &overrides.extensions {
            self.source_resolved.extensions =
                extensions.iter().map(|e| normalize_extension(e)).collect();
        }
        if let Some(include_hidden) = overrides.include_hidden {
            self.source_resolved.include_hidden = include_hidden;
        }
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            source: SourceConfigRaw::default(),
            source_resolved: SourceConfig {
                dir: base.join(DEFAULT_SOURCE_DIR),
                extensions: Vec::new(),
                include_hidden: false,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.source.expand_env()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_resolved.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "source.dir cannot be empty".to_owned(),
            ));
        }

        for ext in &self.source_resolved.extensions {
            if ext.is_empty() {
                return Err(ConfigError::Validation(
                    "source.extensions cannot contain empty entries".to_owned(),
                ));
            }
            if ext.contains(['/', '\\', '.']) {
                return Err(ConfigError::Validation(format!(
                    "source.extensions entry '{ext}' must be a bare extension like \"md\""
                )));
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_resolved = SourceConfig {
            dir: config_dir.join(self.source.dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR)),
            extensions: self
                .source
                .extensions
                .iter()
                .flatten()
                .map(|e| normalize_extension(e))
                .collect(),
            include_hidden: self.source.include_hidden.unwrap_or(false),
        };
    }
}
