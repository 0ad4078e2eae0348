//! Error types for the rippy CLI.

use crate::exit_codes::ExitCode;
use rippy_table::TableError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Loading or validating an input spec failed.
    #[error("{source_name}: {source}")]
    Input {
        source_name: String,
        #[source]
        source: TableError,
    },

    /// Writing the rendered output failed.
    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid combination of arguments.
    #[error("invalid arguments: {0}")]
    Args(String),
}

impl CliError {
    pub fn input(source_name: impl Into<String>, source: TableError) -> Self {
        CliError::Input {
            source_name: source_name.into(),
            source,
        }
    }

    /// Exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Input { source, .. } => match source {
                TableError::Io(_) => ExitCode::IoError,
                TableError::Json(_) | TableError::Toml(_) => ExitCode::ParseError,
                TableError::UnsupportedFormat(_) | TableError::InvalidSpec(_) => {
                    ExitCode::ArgsError
                }
            },
            CliError::Output { .. } => ExitCode::IoError,
            CliError::Args(_) => ExitCode::ArgsError,
        }
    }
}
