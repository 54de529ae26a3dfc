pub mod args;
pub mod commands;
pub mod init;

pub use args::{InitArgs, LintArgs};
use crate::core::config::ConfigLoader;
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
{usage-heading} {usage}\n\
\n{all-args}\n\
{after-help}";

const LONG_ABOUT: &str = "\
All linters enabled in a .tlint.yml file will be run over the current directory and all directories below.
If a .tlint.yml file cannot be found tlint will look for $HOME/.tlint.yml.
Without any config file every linter is run.";

const OVERRIDE_HELP: &str = "\
Config file will be overridden by options. For example
    tlint -m=false
ensures that gometalinter is never run and
    tlint -d
ensures that hadolint is always run.

Environment variables override the config file; options override the environment:";

fn after_long_help() -> String {
    let mut help = OVERRIDE_HELP.to_string();
    for line in ConfigLoader::env_var_documentation() {
        help.push_str("\n    ");
        help.push_str(line);
    }
    help
}

#[derive(Parser, Debug)]
#[command(name = "tlint")]
#[command(version = crate::VERSION)]
#[command(about = "Runs linters recursively within the current directory")]
#[command(long_about = LONG_ABOUT)]
#[command(help_template = HELP_TEMPLATE)]
#[command(after_long_help = after_long_help())]
#[command(args_conflicts_with_subcommands = true)]
#[command(args_override_self = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub lint: LintArgs,

    /// Log at debug level (TL_LOG takes precedence)
    #[arg(long, global = true, help_heading = "Output Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(
        about = "Install the linting tools",
        long_about = "Init installs shellcheck and hadolint with Homebrew, and checkmake and gometalinter with the Go toolchain.",
        after_help = "Example:\n    tlint init --dry-run"
    )]
    Init(InitArgs),
}

/// Run the parsed command and return the process exit code.
pub async fn run(args: Args) -> crate::Result<u8> {
    match args.command {
        Some(Command::Init(init_args)) => init::run(init_args).await,
        None => commands::lint(args.lint).await,
    }
}
