//! CLI configuration via environment variables
//!
//! Settings that only affect the terminal front end. Ranking and output
//! defaults live in `hintwise.toml` / `~/.hintwise/config.toml`.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (HINTWISE_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var_os("HINTWISE_NO_COLOR").is_some() || env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
