//! Hintwise Configuration System
//!
//! Provides configuration management for the suggestion engine including:
//! - Project configuration (hintwise.toml)
//! - Global user configuration (~/.hintwise/config.toml)
//! - Configuration precedence and merging
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.hintwise/config.toml)
//! 2. Project config (./hintwise.toml)
//! 3. Environment variables (HINTWISE_*)
//! 4. CLI flags
//!
//! # Example
//!
//! ```no_run
//! use hintwise_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! let options = config.ranker_options();
//! ```

pub mod global;
pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use global::{GlobalConfig, LoggingConfig};
pub use loader::{Config, ConfigLoader, DEFAULT_LOG_LEVEL, PROJECT_CONFIG_FILE};
pub use project::{OutputConfig, OutputFormat, ProjectConfig, RankingConfig};
