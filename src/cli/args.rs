use crate::core::config::FlagOverrides;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct LintArgs {
    /// Config file (default: ./.tlint.yml, then $HOME/.tlint.yml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Fix go imports with goimports
    #[arg(
        short = 'i',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub imports: Option<bool>,

    /// Fix go formatting with go fmt
    #[arg(
        short = 'f',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub fmt: Option<bool>,

    /// Run gometalinter over ./...
    #[arg(
        short = 'm',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub gometalinter: Option<bool>,

    /// Run hadolint on every Dockerfile
    #[arg(
        short = 'd',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub hadolint: Option<bool>,

    /// Run shellcheck on every *.sh file
    #[arg(
        short = 's',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub shellcheck: Option<bool>,

    /// Run shellcheck on ANY file in a folder called bin, useful for s2i image linting
    #[arg(
        short = 'b',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub shellcheck_bin: Option<bool>,

    /// Run checkmake on every Makefile
    #[arg(
        short = 'c',
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Linters"
    )]
    pub checkmake: Option<bool>,

    /// Exit with status 1 when any linter invocation fails
    #[arg(long, help_heading = "Exit Status")]
    pub fail_on_lint: bool,
}

impl LintArgs {
    /// Flags that were explicitly passed, for layering over the config file.
    pub fn flag_overrides(&self) -> FlagOverrides {
        FlagOverrides {
            imports: self.imports,
            fmt: self.fmt,
            gometalinter: self.gometalinter,
            hadolint: self.hadolint,
            shellcheck: self.shellcheck,
            shellcheck_bin: self.shellcheck_bin,
            checkmake: self.checkmake,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Print the install commands without running them
    #[arg(long)]
    pub dry_run: bool,
}
