//! Configuration module for docseek
//!
//! Manages application configuration including the known search servers.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of hits per search page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Default color for tags created without an explicit color
pub const DEFAULT_TAG_COLOR: &str = "#e0e0e0";

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_tag_color() -> String {
    DEFAULT_TAG_COLOR.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DocseekConfig {
    /// Map of server names to their base URLs
    #[serde(default)]
    pub servers: HashMap<String, String>,

    /// The server to use when none is specified
    #[serde(default)]
    pub default_server: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Hits per search page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Color used by `tag add` when no color is given
    #[serde(default = "default_tag_color")]
    pub default_tag_color: String,
}

impl Default for DocseekConfig {
    fn default() -> Self {
        Self {
            servers: HashMap::new(),
            default_server: None,
            quiet: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            default_tag_color: default_tag_color(),
        }
    }
}

impl DocseekConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("docseek").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// See [`DocseekConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a server to the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_server(&mut self, name: String, url: String) -> Result<(), ConfigError> {
        self.servers.insert(name, url);
        self.save()
    }

    /// Remove a server from the configuration
    ///
    /// Clears the default when the default server is removed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_server(&mut self, name: &str) -> Result<Option<String>, ConfigError> {
        let removed = self.servers.remove(name);
        if self.default_server.as_deref() == Some(name) {
            self.default_server = None;
        }
        self.save()?;
        Ok(removed)
    }

    /// Get a server URL by name
    #[must_use]
    pub fn get_server(&self, name: &str) -> Option<&String> {
        self.servers.get(name)
    }

    /// List all server names, sorted
    #[must_use]
    pub fn list_servers(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.servers.keys().collect();
        names.sort();
        names
    }

    /// Set the default server
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the server name doesn't exist in the configuration
    /// or if saving the configuration fails.
    pub fn set_default_server(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.servers.contains_key(&name) {
            return Err(ConfigError::Message(format!(
                "Server '{name}' does not exist in configuration"
            )));
        }
        self.default_server = Some(name);
        self.save()
    }

    /// Get the default server name
    #[must_use]
    pub const fn get_default_server(&self) -> Option<&String> {
        self.default_server.as_ref()
    }

    /// Resolve the base URL for a named server, or the default server
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no server is named and no default is set, or
    /// if the named server is not configured.
    pub fn resolve_url(&self, server: Option<&str>) -> Result<&str, ConfigError> {
        let name = server
            .or(self.default_server.as_deref())
            .ok_or_else(|| {
                ConfigError::Message(
                    "No default server set. Use 'docseek server add <name> <url>' or pass --url."
                        .to_string(),
                )
            })?;

        self.servers
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::Message(format!("Server '{name}' not found in configuration")))
    }

    /// Request timeout as a `Duration`
    ///
    /// A zero timeout falls back to [`DEFAULT_TIMEOUT_SECS`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}
