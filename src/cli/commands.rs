use crate::{
    cli::args::LintArgs,
    core::{
        config::ConfigLoader,
        dispatcher::{LintDispatcher, RunSummary},
        error::AppError,
        types::ErrorCategory,
    },
    tools::{CommandRunner, ProcessRunner},
    Result,
};
use std::env;
use std::path::Path;

/// Exit code used when `--fail-on-lint` is set and a linter failed.
pub const LINT_FAILURE_EXIT_CODE: u8 = 1;

/// Handles `tlint` without a subcommand: lint the current directory.
pub async fn lint(args: LintArgs) -> Result<u8> {
    let cwd = env::current_dir().map_err(|e| {
        AppError::new(
            ErrorCategory::IoError,
            format!("Failed to resolve working directory: {}", e),
        )
    })?;

    let summary = lint_in(&cwd, &args, ProcessRunner::new()).await?;
    Ok(exit_code(&summary, args.fail_on_lint))
}

/// Resolve configuration for `root` and run every enabled linter with `runner`.
pub async fn lint_in<R: CommandRunner>(
    root: &Path,
    args: &LintArgs,
    runner: R,
) -> Result<RunSummary> {
    let resolved = ConfigLoader::load(args.config.as_deref(), root, &args.flag_overrides())?;

    let dispatcher = LintDispatcher::new(root, &resolved.config, runner);
    let summary = dispatcher.run().await?;

    tracing::debug!(
        "{} linter invocation(s), {} failed",
        summary.invocation_count(),
        summary.failure_count()
    );

    Ok(summary)
}

/// Map a run summary to the process exit code.
///
/// Linter failures only affect the exit code when `fail_on_lint` is set.
pub fn exit_code(summary: &RunSummary, fail_on_lint: bool) -> u8 {
    if !fail_on_lint || summary.is_clean() {
        return 0;
    }

    tracing::warn!("{} linter invocation(s) failed:", summary.failure_count());
    for record in summary.failures() {
        match &record.result.spawn_error {
            Some(error) => tracing::warn!("  {} (could not start: {})", record.invocation, error),
            None => tracing::warn!(
                "  {} (exit code {})",
                record.invocation,
                record
                    .result
                    .exit_code
                    .map(|code| code.to_string())
                    .unwrap_or_else(|| "none".to_string())
            ),
        }
    }
    LINT_FAILURE_EXIT_CODE
}
