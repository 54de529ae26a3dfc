use async_trait::async_trait;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use tlint::cli::commands::{exit_code, lint_in};
use tlint::cli::LintArgs;
use tlint::core::config::TlintConfig;
use tlint::core::dispatcher::LintDispatcher;
use tlint::core::types::LintTool;
use tlint::tools::{CommandInvocation, CommandRunner, ToolResult};

/// Records every invocation; programs listed in `failing` exit with 1.
#[derive(Default)]
struct RecordingRunner {
    seen: Mutex<Vec<CommandInvocation>>,
    failing: Vec<&'static str>,
}

impl RecordingRunner {
    fn failing(programs: &[&'static str]) -> Self {
        RecordingRunner {
            failing: programs.to_vec(),
            ..Default::default()
        }
    }

    fn seen(&self) -> Vec<CommandInvocation> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &CommandInvocation) -> ToolResult {
        self.seen.lock().unwrap().push(invocation.clone());
        let success = !self.failing.iter().any(|p| *p == invocation.program);
        ToolResult {
            success,
            exit_code: Some(if success { 0 } else { 1 }),
            stderr: if success { String::new() } else { "lint error\n".to_string() },
            ..Default::default()
        }
    }
}

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn only(tools: &[LintTool]) -> TlintConfig {
    let mut config = TlintConfig::empty_file();
    for tool in tools {
        config.status.set(*tool, true);
    }
    config
}

#[test]
fn ignore_list_becomes_repeated_flag_value_pairs() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "scripts/deploy.sh");
    let mut config = only(&[LintTool::Shellcheck]);
    config.shellcheck.ignore = vec![
        "SC1090".to_string(),
        "SC2034".to_string(),
        "SC2086".to_string(),
    ];

    let dispatcher = LintDispatcher::new(dir.path(), &config, RecordingRunner::default());
    let invocations = dispatcher.invocations_for(LintTool::Shellcheck).unwrap();

    assert_eq!(invocations.len(), 1);
    let args = &invocations[0].args;
    assert_eq!(
        args[..6],
        ["-e", "SC1090", "-e", "SC2034", "-e", "SC2086"]
    );
    assert!(args[6].ends_with("deploy.sh"));
}

#[test]
fn bin_pass_shares_shellcheck_ignores_and_covers_extensionless_files() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "image/s2i/bin/assemble");
    touch(dir.path(), "image/s2i/bin/run");
    let mut config = only(&[LintTool::ShellcheckBin]);
    config.shellcheck.ignore = vec!["SC2034".to_string()];

    let dispatcher = LintDispatcher::new(dir.path(), &config, RecordingRunner::default());
    let invocations = dispatcher.invocations_for(LintTool::ShellcheckBin).unwrap();

    assert_eq!(invocations.len(), 2);
    for invocation in &invocations {
        assert_eq!(invocation.program, "shellcheck");
        assert_eq!(invocation.args[..2], ["-e", "SC2034"]);
    }
}

#[test]
fn go_tools_run_once_per_go_file() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "main.go");
    touch(dir.path(), "internal/server/server.go");
    touch(dir.path(), "internal/server/server_test.go");
    let config = only(&[LintTool::Imports, LintTool::Fmt]);

    let dispatcher = LintDispatcher::new(dir.path(), &config, RecordingRunner::default());
    let imports = dispatcher.invocations_for(LintTool::Imports).unwrap();
    let fmt = dispatcher.invocations_for(LintTool::Fmt).unwrap();

    assert_eq!(imports.len(), 3);
    assert!(imports.iter().all(|i| i.program == "goimports" && i.args[0] == "-w"));
    assert_eq!(fmt.len(), 3);
    assert!(fmt.iter().all(|i| i.program == "go" && i.args[0] == "fmt"));
}

#[tokio::test(flavor = "current_thread")]
async fn failing_linter_does_not_halt_the_run() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Dockerfile");
    touch(dir.path(), "svc/Dockerfile");
    touch(dir.path(), "Makefile");
    let config = only(&[LintTool::Hadolint, LintTool::Checkmake]);
    let runner = RecordingRunner::failing(&["hadolint"]);

    let dispatcher = LintDispatcher::new(dir.path(), &config, &runner);
    let summary = dispatcher.run().await.unwrap();

    let programs: Vec<String> = runner.seen().into_iter().map(|i| i.program).collect();
    assert_eq!(programs, vec!["hadolint", "hadolint", "checkmake"]);
    assert_eq!(summary.failure_count(), 2);
    assert_eq!(exit_code(&summary, false), 0);
    assert_eq!(exit_code(&summary, true), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn lint_in_applies_flags_over_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".tlint.yml"), "status:\n  checkmake: true\n").unwrap();
    touch(dir.path(), "Makefile");
    touch(dir.path(), "tools/check.sh");

    let args = LintArgs {
        checkmake: Some(false),
        shellcheck: Some(true),
        ..Default::default()
    };
    let runner = RecordingRunner::default();
    let summary = lint_in(dir.path(), &args, &runner).await.unwrap();

    assert_eq!(summary.tools_run(), vec![LintTool::Shellcheck]);
    assert!(summary.is_clean());
}

#[tokio::test(flavor = "current_thread")]
async fn walk_failure_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let config = only(&[LintTool::Shellcheck, LintTool::Checkmake]);
    let runner = RecordingRunner::default();

    let dispatcher = LintDispatcher::new(&missing, &config, &runner);
    let err = dispatcher.run().await.unwrap_err();

    assert_eq!(err.category, tlint::core::types::ErrorCategory::DiscoveryError);
    assert!(runner.seen().is_empty());
}

#[cfg(unix)]
#[tokio::test(flavor = "current_thread")]
async fn unreadable_directory_mid_walk_aborts_before_any_invocation() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Dockerfile");
    touch(dir.path(), "services/private/Dockerfile");
    let locked = dir.path().join("services/private");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not apply to a privileged user.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let config = only(&[LintTool::Hadolint, LintTool::Checkmake]);
    let runner = RecordingRunner::default();
    let result = LintDispatcher::new(dir.path(), &config, &runner).run().await;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.category, tlint::core::types::ErrorCategory::DiscoveryError);
    assert!(runner.seen().is_empty());
}

#[cfg(unix)]
mod process {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tlint::tools::ProcessRunner;

    fn fake_tool(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn real_processes_are_run_sequentially_per_file() {
        let tools = TempDir::new().unwrap();
        let log = tools.path().join("calls.log");
        fake_tool(
            tools.path(),
            "fake-shellcheck",
            &format!("echo \"$@\" >> {}\nexit 1", log.display()),
        );

        let root = TempDir::new().unwrap();
        touch(root.path(), "a.sh");
        touch(root.path(), "b/b.sh");

        let program = tools.path().join("fake-shellcheck");
        let runner = ProcessRunner::new();
        let mut results = Vec::new();
        for file in ["a.sh", "b/b.sh"] {
            let invocation = CommandInvocation::new(program.to_string_lossy())
                .args(["-e", "SC2086"])
                .arg(file)
                .current_dir(root.path());
            results.push(runner.run(&invocation).await);
        }

        assert!(results.iter().all(|r| !r.success && r.exit_code == Some(1)));
        let calls = fs::read_to_string(&log).unwrap();
        assert_eq!(calls, "-e SC2086 a.sh\n-e SC2086 b/b.sh\n");
    }
}
