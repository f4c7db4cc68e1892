//! Error types for the vidlen-core library.
//!
//! Per-file probe failures never surface as errors: they degrade to an
//! unknown duration. `CoreError` covers the failures that the caller has to
//! decide about, such as a probe that could not be launched or a table that
//! cannot be laid out.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for vidlen-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Table row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vidlen-core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a `CoreError::CommandStart` for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a `CoreError::CommandFailed` from a finished process.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}
