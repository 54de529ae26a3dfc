use clap::Parser;
use std::process::ExitCode;
use tlint::cli::{self, Args};
use tlint::core::{AppError, DefaultErrorReporter, ErrorReporter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = tlint::logging::init(args.verbose) {
        eprintln!("tlint: {:#}", err);
        return ExitCode::FAILURE;
    }

    match cli::run(args).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            DefaultErrorReporter::new().report_error(&AppError::from(err));
            ExitCode::FAILURE
        }
    }
}
