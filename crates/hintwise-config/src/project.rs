//! Project Configuration (hintwise.toml)
//!
//! Handles project-level configuration stored in `hintwise.toml` at the project root.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on `ranking.max_suggestions`.
pub const MAX_SUGGESTIONS_LIMIT: usize = 50;

/// Project configuration from hintwise.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Ranking configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<RankingConfig>,

    /// Output configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

/// Ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    /// Maximum suggestions returned (default: 5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<usize>,

    /// Pool size at which scoring goes parallel (default: 512)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,

    /// Additional names that earn the well-known bonus
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_well_known: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format (default: text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Colorize text output (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Suggestion output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl ProjectConfig {
    /// Load project configuration from a file
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

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(ranking) = &self.ranking {
            ranking.validate()?;
        }
        Ok(())
    }

    /// Ranking section, created on first write
    pub fn ranking_mut(&mut self) -> &mut RankingConfig {
        self.ranking.get_or_insert_with(RankingConfig::default)
    }

    /// Output section, created on first write
    pub fn output_mut(&mut self) -> &mut OutputConfig {
        self.output.get_or_insert_with(OutputConfig::default)
    }
}

impl RankingConfig {
    /// Validate ranking values
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(max) = self.max_suggestions {
            validate_max_suggestions("ranking.max_suggestions", max)?;
        }

        if let Some(name) = self.extra_well_known.iter().find(|n| n.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "ranking.extra_well_known".to_string(),
                reason: format!("names cannot be empty, got '{}'", name),
            });
        }

        Ok(())
    }
}

/// `max_suggestions` must be between 1 and [`MAX_SUGGESTIONS_LIMIT`]
pub(crate) fn validate_max_suggestions(field: &str, value: usize) -> ConfigResult<()> {
    if value == 0 || value > MAX_SUGGESTIONS_LIMIT {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!(
                "must be between 1 and {}, got {}",
                MAX_SUGGESTIONS_LIMIT, value
            ),
        });
    }
    Ok(())
}
