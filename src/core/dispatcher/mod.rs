//! Turns a resolved configuration into linter invocations and runs them.
//!
//! Tools run in the order of [`LintTool::ALL`]. Discovery for a tool happens
//! right before that tool runs, so files written by an earlier tool are seen
//! by later ones. A failing invocation is recorded and the run continues.

use crate::core::config::TlintConfig;
use crate::core::error::AppError;
use crate::core::types::LintTool;
use crate::tools::{CommandInvocation, CommandRunner, ToolResult};
use crate::utils::files;
use std::path::PathBuf;

/// Aggregator config picked up from the lint root when present.
pub const GOMETALINTER_CONFIG: &str = ".gometalinter.json";
/// checkmake config picked up from the lint root when present.
pub const CHECKMAKE_CONFIG: &str = ".checkmake.ini";
/// Package wildcard handed to the aggregator.
pub const GO_PACKAGE_WILDCARD: &str = "./...";

/// One executed invocation and what came of it.
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    pub tool: LintTool,
    pub invocation: CommandInvocation,
    pub result: ToolResult,
}

/// Everything a dispatcher run executed, in execution order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub records: Vec<InvocationRecord>,
}

impl RunSummary {
    pub fn invocation_count(&self) -> usize {
        self.records.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InvocationRecord> {
        self.records.iter().filter(|record| !record.result.success)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    /// Tools that ran at least once, in execution order.
    pub fn tools_run(&self) -> Vec<LintTool> {
        let mut tools: Vec<LintTool> = Vec::new();
        for record in &self.records {
            if tools.last() != Some(&record.tool) {
                tools.push(record.tool);
            }
        }
        tools
    }
}

pub struct LintDispatcher<'a, R> {
    root: PathBuf,
    config: &'a TlintConfig,
    runner: R,
}

impl<'a, R: CommandRunner> LintDispatcher<'a, R> {
    pub fn new<P: Into<PathBuf>>(root: P, config: &'a TlintConfig, runner: R) -> Self {
        LintDispatcher {
            root: root.into(),
            config,
            runner,
        }
    }

    /// Run every enabled tool. Only discovery failures abort the run.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();

        for tool in LintTool::ALL {
            if !self.config.is_enabled(tool) {
                tracing::debug!("Skipping {}: disabled", tool);
                continue;
            }

            let invocations = self.invocations_for(tool)?;
            tracing::debug!("Running {} over {} target(s)", tool, invocations.len());

            for invocation in invocations {
                let result = self.runner.run(&invocation).await;
                summary.records.push(InvocationRecord {
                    tool,
                    invocation,
                    result,
                });
            }
        }

        Ok(summary)
    }

    /// Discover inputs for `tool` and build its invocations, without running
    /// anything. Ignores the tool's enabled flag.
    pub fn invocations_for(&self, tool: LintTool) -> Result<Vec<CommandInvocation>, AppError> {
        let invocations = match tool {
            LintTool::Gometalinter => vec![self.gometalinter_invocation()],
            _ => {
                let base = self.base_args(tool);
                self.inputs_for(tool)?
                    .into_iter()
                    .map(|file| {
                        self.invocation(tool)
                            .args(base.iter().cloned())
                            .arg(file.to_string_lossy())
                    })
                    .collect()
            }
        };
        Ok(invocations)
    }

    fn inputs_for(&self, tool: LintTool) -> Result<Vec<PathBuf>, AppError> {
        let found = match tool {
            LintTool::Imports | LintTool::Fmt => files::find_by_extension(&self.root, "go"),
            LintTool::Hadolint => files::find_by_name(&self.root, "Dockerfile"),
            LintTool::Shellcheck => files::find_by_extension(&self.root, "sh"),
            LintTool::ShellcheckBin => files::find_dir_contents(&self.root, "bin"),
            LintTool::Checkmake => files::find_by_name(&self.root, "Makefile"),
            LintTool::Gometalinter => Ok(Vec::new()),
        }?;
        Ok(found)
    }

    /// Arguments placed before the file argument.
    fn base_args(&self, tool: LintTool) -> Vec<String> {
        match tool {
            LintTool::Imports => vec!["-w".to_string()],
            LintTool::Fmt => vec!["fmt".to_string()],
            LintTool::Hadolint => ignore_args("--ignore", self.config.ignore_rules(tool)),
            LintTool::Shellcheck | LintTool::ShellcheckBin => {
                ignore_args("-e", self.config.ignore_rules(tool))
            }
            LintTool::Checkmake => {
                let config = self.root.join(CHECKMAKE_CONFIG);
                if config.is_file() {
                    vec![format!("--config={}", config.display())]
                } else {
                    Vec::new()
                }
            }
            LintTool::Gometalinter => Vec::new(),
        }
    }

    fn gometalinter_invocation(&self) -> CommandInvocation {
        let mut invocation = self
            .invocation(LintTool::Gometalinter)
            .arg(GO_PACKAGE_WILDCARD);
        let config = self.root.join(GOMETALINTER_CONFIG);
        if config.is_file() {
            invocation = invocation
                .arg("--config")
                .arg(config.to_string_lossy());
        }
        invocation
    }

    fn invocation(&self, tool: LintTool) -> CommandInvocation {
        CommandInvocation::new(tool.program()).current_dir(&self.root)
    }
}

/// Expand an ignore list into repeated `<flag> <rule>` pairs.
pub fn ignore_args(flag: &str, rules: &[String]) -> Vec<String> {
    rules
        .iter()
        .flat_map(|rule| [flag.to_string(), rule.clone()])
        .collect()
}
