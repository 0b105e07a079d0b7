//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::global::GlobalConfig;
use crate::project::{validate_max_suggestions, OutputFormat, ProjectConfig};
use crate::{ConfigError, ConfigResult};
use hintwise_core::constants::{DEFAULT_PARALLEL_THRESHOLD, TOP_K};
use hintwise_core::RankerOptions;
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "hintwise.toml";

/// Log level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.hintwise/config.toml) - lowest priority
/// 2. Project config (./hintwise.toml) - overrides global
/// 3. Environment variables (HINTWISE_*) - overrides project
/// 4. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Global configuration
    pub global: GlobalConfig,

    /// Project root directory (where hintwise.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Create a loader that reads global configuration from `path` instead of
    /// the home directory
    pub fn with_global_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find hintwise.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        // Find project root (directory containing hintwise.toml)
        let (project_root, project_config) = self.find_project_config(start_dir)?;

        // Load global config (optional)
        let global_config = self.load_global_config().unwrap_or_default();

        // Apply environment variable overrides
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let global_config = self.load_global_config().unwrap_or_default();
        let project_config = self.apply_env_overrides(project_config)?;

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config), or the default config when no
    /// hintwise.toml exists up to the filesystem root
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Load global configuration from ~/.hintwise/config.toml
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        let path = match &self.global_config_path {
            Some(path) => path.clone(),
            None => {
                let path = GlobalConfig::global_config_path()?;
                self.global_config_path = Some(path.clone());
                path
            }
        };

        // Global config is optional - if it doesn't exist, return default
        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        GlobalConfig::load_from_file(&path)
    }

    /// Apply environment variable overrides to project config
    ///
    /// Recognized: HINTWISE_MAX_SUGGESTIONS, HINTWISE_PARALLEL_THRESHOLD, HINTWISE_OUTPUT
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(value) = env::var("HINTWISE_MAX_SUGGESTIONS") {
            let max = parse_usize_var("HINTWISE_MAX_SUGGESTIONS", &value)?;
            validate_max_suggestions("HINTWISE_MAX_SUGGESTIONS", max)?;
            config.ranking_mut().max_suggestions = Some(max);
        }

        if let Ok(value) = env::var("HINTWISE_PARALLEL_THRESHOLD") {
            let threshold = parse_usize_var("HINTWISE_PARALLEL_THRESHOLD", &value)?;
            config.ranking_mut().parallel_threshold = Some(threshold);
        }

        if let Ok(value) = env::var("HINTWISE_OUTPUT") {
            let format = OutputFormat::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                field: "HINTWISE_OUTPUT".to_string(),
                reason: format!("must be 'text' or 'json', got '{}'", value),
            })?;
            config.output_mut().format = Some(format);
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_usize_var(name: &str, value: &str) -> ConfigResult<usize> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: name.to_string(),
        reason: format!("expected a non-negative integer, got '{}'", value),
    })
}

impl Config {
    /// Effective max suggestions (project > global > default)
    pub fn max_suggestions(&self) -> usize {
        self.project
            .ranking
            .as_ref()
            .and_then(|r| r.max_suggestions)
            .or_else(|| self.global.ranking.as_ref().and_then(|r| r.max_suggestions))
            .unwrap_or(TOP_K)
    }

    /// Effective parallel scoring threshold (project > global > default)
    pub fn parallel_threshold(&self) -> usize {
        self.project
            .ranking
            .as_ref()
            .and_then(|r| r.parallel_threshold)
            .or_else(|| {
                self.global
                    .ranking
                    .as_ref()
                    .and_then(|r| r.parallel_threshold)
            })
            .unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Extra well-known names from both global and project config
    pub fn extra_well_known(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for ranking in [self.global.ranking.as_ref(), self.project.ranking.as_ref()]
            .into_iter()
            .flatten()
        {
            for name in &ranking.extra_well_known {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Effective output format (project > global > text)
    pub fn output_format(&self) -> OutputFormat {
        self.project
            .output
            .as_ref()
            .and_then(|o| o.format)
            .or_else(|| self.global.output.as_ref().and_then(|o| o.format))
            .unwrap_or_default()
    }

    /// Whether text output is colorized (project > global > true)
    pub fn color(&self) -> bool {
        self.project
            .output
            .as_ref()
            .and_then(|o| o.color)
            .or_else(|| self.global.output.as_ref().and_then(|o| o.color))
            .unwrap_or(true)
    }

    /// Configured log level (global > default)
    pub fn log_level(&self) -> &str {
        self.global.log_level().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Ranker options for the effective configuration
    pub fn ranker_options(&self) -> RankerOptions {
        RankerOptions {
            max_suggestions: self.max_suggestions(),
            parallel_threshold: self.parallel_threshold(),
            extra_well_known: self.extra_well_known(),
        }
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if this is a project (has hintwise.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
