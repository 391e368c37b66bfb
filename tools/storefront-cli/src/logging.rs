//! Log subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let filter = build_env_filter(config, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn build_env_filter(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { config.level.as_str() };
        EnvFilter::new(level)
    })
}
