pub mod execution;

pub use execution::ProcessRunner;

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl CommandInvocation {
    pub fn new<P: Into<String>>(program: P) -> Self {
        CommandInvocation {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg<A: Into<String>>(mut self, arg: A) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir<D: Into<PathBuf>>(mut self, dir: D) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Outcome of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolResult {
    pub success: bool,
    /// `None` when the process was killed by a signal or never started
    pub exit_code: Option<i32>,
    pub execution_time_ms: u64,
    pub stdout: String,
    pub stderr: String,
    /// Set when the executable could not be started at all
    pub spawn_error: Option<String>,
}

impl ToolResult {
    pub fn spawn_failed<E: Into<String>>(error: E) -> Self {
        ToolResult {
            success: false,
            spawn_error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Seam between the dispatcher and the operating system.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` to completion. Failures are reported in the result,
    /// never as an error.
    async fn run(&self, invocation: &CommandInvocation) -> ToolResult;
}

#[async_trait]
impl<'r, T: CommandRunner + ?Sized> CommandRunner for &'r T {
    async fn run(&self, invocation: &CommandInvocation) -> ToolResult {
        (**self).run(invocation).await
    }
}
