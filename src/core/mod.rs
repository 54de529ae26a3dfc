pub mod config;
pub mod dispatcher;
pub mod error;
pub mod types;

pub use config::{ConfigLoader, ConfigSource, ConfigValidator, FlagOverrides, TlintConfig};
pub use dispatcher::{LintDispatcher, RunSummary};
pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use types::*;
