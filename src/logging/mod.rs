pub mod config;
pub mod layers;

pub use config::LoggingConfig;
pub use layers::console::ConsoleOutput;

use crate::logging::layers::console;
use crate::Result;
use anyhow::{anyhow, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize the logging framework.
///
/// Configuration precedence is defaults, then `--verbose`, then the `TL_LOG`
/// and `TL_LOG_OUTPUT` environment variables. Errors when invoked more than
/// once per process.
pub fn init(verbose: bool) -> Result<LoggingConfig> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let config = LoggingConfig::load(verbose)?;
    let env_filter =
        EnvFilter::try_new(&config.default_level).context("failed to configure tracing level")?;
    let console_output = config.console_output.unwrap_or_default();

    tracing_subscriber::registry()
        .with(console::console_layer(console_output))
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(config)
}

#[cfg(test)]
/// Reset the initialization guard so tests can reconfigure logging multiple times.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
