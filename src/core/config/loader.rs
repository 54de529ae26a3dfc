use super::{ConfigValidator, TlintConfig};
use crate::core::error::AppError;
use crate::core::types::{ErrorCategory, LintTool};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the project-local config file.
pub const CONFIG_FILE_NAME: &str = ".tlint.yml";

/// File names searched for in the home directory, in order.
const HOME_CONFIG_NAMES: [&str; 2] = [".tlint.yml", ".tlint.yaml"];

pub const HADOLINT_IGNORE_ENV: &str = "TL_HADOLINT_IGNORE";
pub const SHELLCHECK_IGNORE_ENV: &str = "TL_SHELLCHECK_IGNORE";

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given with `--config`
    Explicit(PathBuf),
    /// `.tlint.yml` in the working directory
    Local(PathBuf),
    /// `.tlint.yml` in the home directory
    Home(PathBuf),
    /// No file; every tool enabled
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Local(path) | ConfigSource::Home(path) => {
                Some(path)
            }
            ConfigSource::Defaults => None,
        }
    }
}

/// Tool switches passed explicitly on the command line. `None` means the
/// flag was not given and the config value stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub imports: Option<bool>,
    pub fmt: Option<bool>,
    pub gometalinter: Option<bool>,
    pub hadolint: Option<bool>,
    pub shellcheck: Option<bool>,
    pub shellcheck_bin: Option<bool>,
    pub checkmake: Option<bool>,
}

impl FlagOverrides {
    pub fn get(&self, tool: LintTool) -> Option<bool> {
        match tool {
            LintTool::Imports => self.imports,
            LintTool::Fmt => self.fmt,
            LintTool::Gometalinter => self.gometalinter,
            LintTool::Hadolint => self.hadolint,
            LintTool::Shellcheck => self.shellcheck,
            LintTool::ShellcheckBin => self.shellcheck_bin,
            LintTool::Checkmake => self.checkmake,
        }
    }

    pub fn with(mut self, tool: LintTool, value: bool) -> Self {
        let slot = match tool {
            LintTool::Imports => &mut self.imports,
            LintTool::Fmt => &mut self.fmt,
            LintTool::Gometalinter => &mut self.gometalinter,
            LintTool::Hadolint => &mut self.hadolint,
            LintTool::Shellcheck => &mut self.shellcheck,
            LintTool::ShellcheckBin => &mut self.shellcheck_bin,
            LintTool::Checkmake => &mut self.checkmake,
        };
        *slot = Some(value);
        self
    }
}

/// Configuration after file, environment and flag resolution.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: TlintConfig,
    pub source: ConfigSource,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve the configuration for a run anchored at `cwd`.
    ///
    /// Precedence, lowest first: defaults or config file, `TL_*` environment
    /// variables, explicit command-line flags.
    pub fn load(
        explicit: Option<&Path>,
        cwd: &Path,
        flags: &FlagOverrides,
    ) -> Result<ResolvedConfig, AppError> {
        let home = dirs_next::home_dir();
        Self::load_with_home(explicit, cwd, home.as_deref(), flags)
    }

    /// Same as [`ConfigLoader::load`] with an explicit home directory.
    pub fn load_with_home(
        explicit: Option<&Path>,
        cwd: &Path,
        home: Option<&Path>,
        flags: &FlagOverrides,
    ) -> Result<ResolvedConfig, AppError> {
        let mut source = Self::locate(explicit, cwd, home);

        let mut config = match source.path().map(Path::to_path_buf) {
            Some(path) => match Self::load_from_file(&path)? {
                Some(config) => {
                    tracing::info!("Using config file: {}", path.display());
                    config
                }
                None => {
                    tracing::warn!(
                        "Config file {} not found; running every linter",
                        path.display()
                    );
                    source = ConfigSource::Defaults;
                    TlintConfig::default()
                }
            },
            None => {
                tracing::debug!("No config file found; running every linter");
                TlintConfig::default()
            }
        };

        Self::apply_env_overrides(&mut config);
        Self::apply_flag_overrides(&mut config, flags);
        ConfigValidator::validate(&config)?;

        Ok(ResolvedConfig { config, source })
    }

    /// Pick the config file to read without touching its contents.
    pub fn locate(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return ConfigSource::Local(local);
        }

        if let Some(home) = home {
            for name in HOME_CONFIG_NAMES {
                let candidate = home.join(name);
                if candidate.is_file() {
                    return ConfigSource::Home(candidate);
                }
            }
        }

        ConfigSource::Defaults
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<TlintConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
            .with_suggestion("Check that the config file is a readable regular file")
        })?;

        if content.trim().is_empty() {
            return Ok(Some(TlintConfig::empty_file()));
        }

        let config: TlintConfig = serde_yaml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
            .with_suggestion("Expected `status`, `hadolint.ignore` and `shellcheck.ignore` keys")
        })?;

        Ok(Some(config))
    }

    /// Apply `TL_*` variables from the process environment.
    pub fn apply_env_overrides(config: &mut TlintConfig) {
        Self::apply_env_overrides_from(config, |key| env::var(key).ok());
    }

    /// Apply `TL_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from<F>(config: &mut TlintConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for tool in LintTool::ALL {
            let key = tool.env_var();
            if let Some(raw) = lookup(&key) {
                match parse_bool(&raw) {
                    Some(value) => {
                        tracing::debug!("Config overridden by environment: {}={}", key, value);
                        config.status.set(tool, value);
                    }
                    None => tracing::warn!("Ignoring {}: '{}' is not a boolean", key, raw),
                }
            }
        }

        if let Some(raw) = lookup(HADOLINT_IGNORE_ENV) {
            config.hadolint.ignore = split_list(&raw);
        }

        if let Some(raw) = lookup(SHELLCHECK_IGNORE_ENV) {
            config.shellcheck.ignore = split_list(&raw);
        }
    }

    /// Apply flags that were explicitly passed on the command line.
    pub fn apply_flag_overrides(config: &mut TlintConfig, flags: &FlagOverrides) {
        for tool in LintTool::ALL {
            if let Some(value) = flags.get(tool) {
                tracing::info!("Config overridden by option: {}", tool.flag_name());
                config.status.set(tool, value);
            }
        }
    }

    /// One line per supported environment variable, for help output.
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "TL_STATUS_IMPORTS - Enable or disable goimports (true/false)",
            "TL_STATUS_FMT - Enable or disable go fmt (true/false)",
            "TL_STATUS_GOMETALINTER - Enable or disable gometalinter (true/false)",
            "TL_STATUS_HADOLINT - Enable or disable hadolint (true/false)",
            "TL_STATUS_SHELLCHECK - Enable or disable shellcheck on *.sh files (true/false)",
            "TL_STATUS_SHELLCHECK_BIN - Enable or disable shellcheck on bin/ directories (true/false)",
            "TL_STATUS_CHECKMAKE - Enable or disable checkmake (true/false)",
            "TL_HADOLINT_IGNORE - Comma-separated hadolint rules to ignore",
            "TL_SHELLCHECK_IGNORE - Comma-separated shellcheck rules to ignore",
        ]
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
