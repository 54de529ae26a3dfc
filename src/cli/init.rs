use crate::cli::args::InitArgs;
use crate::tools::{CommandInvocation, CommandRunner, ProcessRunner};
use crate::Result;

/// Commands that install every linter tlint drives, in order.
pub fn install_steps() -> Vec<CommandInvocation> {
    vec![
        CommandInvocation::new("brew").args(["install", "shellcheck", "hadolint"]),
        CommandInvocation::new("go").args(["install", "github.com/mrtazz/checkmake/cmd/checkmake@latest"]),
        CommandInvocation::new("go").args(["install", "github.com/alecthomas/gometalinter@latest"]),
        CommandInvocation::new("gometalinter").arg("--install"),
    ]
}

/// Handles `tlint init` by installing the external linters.
pub async fn run(args: InitArgs) -> Result<u8> {
    run_with(&args, ProcessRunner::new()).await
}

/// Run (or with `--dry-run`, print) the install steps. A failed step is
/// logged and the remaining steps still run.
pub async fn run_with<R: CommandRunner>(args: &InitArgs, runner: R) -> Result<u8> {
    let steps = install_steps();

    if args.dry_run {
        for step in &steps {
            println!("{}", step);
        }
        return Ok(0);
    }

    let mut failed = 0;
    for step in &steps {
        tracing::info!("Running: {}", step);
        let result = runner.run(step).await;
        if !result.success {
            failed += 1;
            tracing::warn!("Install step failed: {}", step);
        }
    }

    if failed > 0 {
        tracing::warn!("{} of {} install step(s) failed", failed, steps.len());
    }

    Ok(0)
}
