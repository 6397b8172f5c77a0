//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::error::DocError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Doc(#[from] DocError),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Doc(e) => match e {
                DocError::FileNotFound(_) => crate::exitcode::NOINPUT,
                DocError::Read { .. } | DocError::Write { .. } => crate::exitcode::IOERR,
                DocError::EmptyExports(_) => crate::exitcode::DATAERR,
            },
        }
    }
}
