use crate::core::types::LintTool;
use serde::{Deserialize, Deserializer, Serialize};

/// Resolved tlint configuration, read from `.tlint.yml`.
///
/// `TlintConfig::default()` is the configuration used when no file exists:
/// every tool enabled, no ignore rules. Once a file is read, tools are
/// opt-in and any `status` key the file omits stays disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlintConfig {
    /// Which tools run
    #[serde(default = "StatusConfig::none_enabled")]
    pub status: StatusConfig,

    /// hadolint rule suppressions
    #[serde(default)]
    pub hadolint: IgnoreConfig,

    /// shellcheck rule suppressions, shared by the `bin/` pass
    #[serde(default)]
    pub shellcheck: IgnoreConfig,
}

/// Per-tool enablement switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    #[serde(default)]
    pub imports: bool,
    #[serde(default)]
    pub fmt: bool,
    #[serde(default)]
    pub gometalinter: bool,
    #[serde(default)]
    pub hadolint: bool,
    #[serde(default)]
    pub shellcheck: bool,
    #[serde(default)]
    pub shellcheck_bin: bool,
    #[serde(default)]
    pub checkmake: bool,
}

/// A list of rule identifiers passed to a linter to suppress checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default, deserialize_with = "rule_list")]
    pub ignore: Vec<String>,
}

/// Accepts a YAML sequence, a whitespace-separated string or null.
fn rule_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RuleList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<RuleList>::deserialize(deserializer)? {
        Some(RuleList::One(rules)) => rules.split_whitespace().map(str::to_string).collect(),
        Some(RuleList::Many(rules)) => rules,
        None => Vec::new(),
    })
}

impl StatusConfig {
    pub fn all_enabled() -> Self {
        Self::uniform(true)
    }

    pub fn none_enabled() -> Self {
        Self::uniform(false)
    }

    fn uniform(value: bool) -> Self {
        StatusConfig {
            imports: value,
            fmt: value,
            gometalinter: value,
            hadolint: value,
            shellcheck: value,
            shellcheck_bin: value,
            checkmake: value,
        }
    }

    pub fn get(&self, tool: LintTool) -> bool {
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

    pub fn set(&mut self, tool: LintTool, value: bool) {
        let slot = match tool {
            LintTool::Imports => &mut self.imports,
            LintTool::Fmt => &mut self.fmt,
            LintTool::Gometalinter => &mut self.gometalinter,
            LintTool::Hadolint => &mut self.hadolint,
            LintTool::Shellcheck => &mut self.shellcheck,
            LintTool::ShellcheckBin => &mut self.shellcheck_bin,
            LintTool::Checkmake => &mut self.checkmake,
        };
        *slot = value;
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl Default for TlintConfig {
    fn default() -> Self {
        TlintConfig {
            status: StatusConfig::all_enabled(),
            hadolint: IgnoreConfig::default(),
            shellcheck: IgnoreConfig::default(),
        }
    }
}

impl TlintConfig {
    /// Configuration of a config file that enables nothing.
    pub fn empty_file() -> Self {
        TlintConfig {
            status: StatusConfig::none_enabled(),
            ..Default::default()
        }
    }

    pub fn is_enabled(&self, tool: LintTool) -> bool {
        self.status.get(tool)
    }

    /// Ignore rules applicable to `tool`; empty for tools without an ignore list.
    pub fn ignore_rules(&self, tool: LintTool) -> &[String] {
        match tool {
            LintTool::Hadolint => &self.hadolint.ignore,
            LintTool::Shellcheck | LintTool::ShellcheckBin => &self.shellcheck.ignore,
            _ => &[],
        }
    }
}

pub mod loader;
pub mod validation;

pub use loader::{ConfigLoader, ConfigSource, FlagOverrides, ResolvedConfig, CONFIG_FILE_NAME};
pub use validation::ConfigValidator;
