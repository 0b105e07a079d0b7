//! Global Configuration (~/.hintwise/config.toml)
//!
//! Handles user-level configuration stored in `~/.hintwise/config.toml`.

use crate::project::{OutputConfig, RankingConfig};
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration from ~/.hintwise/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Ranking defaults, overridden per project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<RankingConfig>,

    /// Output defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,

    /// Logging settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default log level ("trace", "debug", "info", "warn", "error", "off")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the global configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(ranking) = &self.ranking {
            ranking.validate()?;
        }

        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }

        Ok(())
    }

    /// Get the global config file path (~/.hintwise/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".hintwise").join("config.toml"))
    }

    /// Get the configured log level
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

/// Validate log level value
fn validate_log_level(field: &str, value: &str) -> ConfigResult<()> {
    if !matches!(
        value.to_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    ) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!(
                "must be 'trace', 'debug', 'info', 'warn', 'error', or 'off', got '{}'",
                value
            ),
        });
    }
    Ok(())
}
