//! Error types for the trek command-line shell.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The path failed validation. Details have already been written to
    /// the error stream.
    #[error("invalid path format: {0}")]
    InvalidPath(String),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
