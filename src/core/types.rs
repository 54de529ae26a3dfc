use std::fmt;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ConfigError,
    ValidationError,
    DiscoveryError,
    IoError,
    InternalError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The linters tlint knows how to drive, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintTool {
    Imports,
    Fmt,
    Gometalinter,
    Hadolint,
    Shellcheck,
    ShellcheckBin,
    Checkmake,
}

impl LintTool {
    /// Fixed execution order used by the dispatcher.
    pub const ALL: [LintTool; 7] = [
        LintTool::Imports,
        LintTool::Fmt,
        LintTool::Gometalinter,
        LintTool::Hadolint,
        LintTool::Shellcheck,
        LintTool::ShellcheckBin,
        LintTool::Checkmake,
    ];

    /// Key under `status` in `.tlint.yml`.
    pub fn config_key(self) -> &'static str {
        match self {
            LintTool::Imports => "imports",
            LintTool::Fmt => "fmt",
            LintTool::Gometalinter => "gometalinter",
            LintTool::Hadolint => "hadolint",
            LintTool::Shellcheck => "shellcheck",
            LintTool::ShellcheckBin => "shellcheck_bin",
            LintTool::Checkmake => "checkmake",
        }
    }

    /// Long command-line flag that toggles this tool.
    pub fn flag_name(self) -> &'static str {
        match self {
            LintTool::ShellcheckBin => "shellcheck-bin",
            other => other.config_key(),
        }
    }

    /// Environment variable that overrides `status.<key>`.
    pub fn env_var(self) -> String {
        format!("TL_STATUS_{}", self.config_key().to_uppercase())
    }

    /// Executable invoked for this tool.
    pub fn program(self) -> &'static str {
        match self {
            LintTool::Imports => "goimports",
            LintTool::Fmt => "go",
            LintTool::Gometalinter => "gometalinter",
            LintTool::Hadolint => "hadolint",
            LintTool::Shellcheck | LintTool::ShellcheckBin => "shellcheck",
            LintTool::Checkmake => "checkmake",
        }
    }
}

impl fmt::Display for LintTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}
