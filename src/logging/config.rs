use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::{anyhow, Context};
use std::env;
use tracing_subscriber::filter::EnvFilter;

const DEFAULT_LEVEL: &str = "info";
const VERBOSE_LEVEL: &str = "debug";

pub const LOG_LEVEL_ENV: &str = "TL_LOG";
pub const LOG_OUTPUT_ENV: &str = "TL_LOG_OUTPUT";

/// Resolved logging configuration after flags and env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: Option<ConsoleOutput>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: None,
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, `--verbose`, env overrides.
    pub fn load(verbose: bool) -> Result<Self> {
        Self::load_from(verbose, |key| env::var(key).ok())
    }

    pub fn load_from<F>(verbose: bool, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoggingConfig::default();
        if verbose {
            config.default_level = VERBOSE_LEVEL.to_string();
        }
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.default_level = level.trim().to_string();
            }
        }

        if let Some(output) = lookup(LOG_OUTPUT_ENV) {
            let parsed = output
                .parse::<ConsoleOutput>()
                .map_err(|err| anyhow!(err))
                .with_context(|| format!("invalid {}", LOG_OUTPUT_ENV))?;
            self.console_output = Some(parsed);
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.default_level).map_err(|_| {
            anyhow!(
                "{} must be a valid tracing directive, got '{}'",
                LOG_LEVEL_ENV,
                self.default_level
            )
        })?;
        Ok(())
    }
}
