//! Diagnostic logging to stderr

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the stderr logger.
///
/// Filter precedence: `--log-level` if given, else `RUST_LOG`, else
/// `configured` (from config files, which defaults to "warn").
pub fn init_logger(log_level: Option<&str>, configured: &str, no_color: bool) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .with_filter(filter);

    // A subscriber may already be installed when called from tests
    if let Err(e) = tracing_subscriber::registry().with(stderr_layer).try_init() {
        tracing::debug!("logger already initialized: {}", e);
    }

    Ok(())
}
