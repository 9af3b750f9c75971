// Configuration utilities and JSON parsing

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, VermanError};

/// Log level names accepted in the configuration file
const LOG_LEVELS: &[&str] = &["debug", "info", "warning", "error"];

/// Logging section of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level to log: "debug", "info", "warning" or "error"
    pub level: String,
    /// Whether log output is also written to a timestamped log file
    pub file_logging_enabled: bool,
    /// Directory the log file is created in
    pub file_path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            file_logging_enabled: false,
            file_path: None,
        }
    }
}

/// Email section of the configuration file, used for release announcements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Subject line for announcements
    pub subject: String,
    /// Recipient address
    pub to: String,
    /// Sender address
    pub from: String,
    /// Compose the announcement body as HTML instead of plain text
    pub html: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            subject: "Release announcement".to_string(),
            to: String::new(),
            from: String::new(),
            html: false,
        }
    }
}

/// The parsed contents of a `config.json` file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub log: LogConfig,
    /// Announcement settings
    pub email: EmailConfig,
}

/// Configuration parsing and validation utilities
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VermanError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            VermanError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse a configuration from a JSON string with validation
    pub fn parse(content: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| VermanError::ConfigError(format!("Invalid JSON syntax: {}", e)))?;

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load the configuration from the default locations.
    ///
    /// Looks for `config.json` in the working directory first, then under
    /// the home configuration directory. When neither exists the built-in
    /// defaults are used.
    pub fn load_or_default() -> Result<Config> {
        let local = get_config_path();
        if local.exists() {
            return Self::load(local);
        }

        let home = get_home_config_path();
        if home.exists() {
            return Self::load(home);
        }

        Ok(Config::default())
    }

    /// Validate configuration rules beyond what deserialization enforces
    fn validate(config: &Config) -> Result<()> {
        let level = config.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(VermanError::ConfigError(format!(
                "Unknown log level '{}' (expected one of: {})",
                config.log.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if config.log.file_logging_enabled && config.log.file_path.is_none() {
            return Err(VermanError::ConfigError(
                "File logging is enabled but no file path is set".to_string(),
            ));
        }

        Ok(())
    }
}

/// Path of the configuration file in the working directory
pub fn get_config_path() -> PathBuf {
    PathBuf::from("config.json")
}

/// Path of the configuration file under the user's home directory
pub fn get_home_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".verman")
        .join("config.json")
}
