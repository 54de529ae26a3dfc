use crate::tools::{CommandInvocation, CommandRunner, ToolResult};
use async_trait::async_trait;
use std::time::Instant;

/// Runs invocations as real subprocesses and logs whatever they print.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        ProcessRunner
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, invocation: &CommandInvocation) -> ToolResult {
        tracing::debug!("Executing: {}", invocation);

        let mut command = tokio::process::Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let start_time = Instant::now();
        let output = match command.output().await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to execute {}: {}", invocation.program, e);
                return ToolResult::spawn_failed(e.to_string());
            }
        };
        let execution_time_ms = start_time.elapsed().as_millis() as u64;

        let result = ToolResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            execution_time_ms,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            spawn_error: None,
        };

        if !result.stdout.is_empty() {
            tracing::info!("{}", result.stdout.trim_end());
        }
        if !result.stderr.is_empty() {
            tracing::info!("{}", result.stderr.trim_end());
        }
        if !result.success {
            tracing::debug!(
                exit_code = ?result.exit_code,
                "{} exited unsuccessfully after {}ms",
                invocation,
                execution_time_ms
            );
        }

        result
    }
}
