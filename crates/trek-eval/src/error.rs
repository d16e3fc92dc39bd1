//! Error types for the trek simulator.

use thiserror::Error;
use trek_types::PathErrors;

/// Why a strict simulation refused to run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulateError {
    /// The path contains text outside the token grammar, or is empty.
    #[error("invalid path: {0}")]
    InvalidPath(PathErrors),
}

/// Result alias for simulator operations.
pub type SimResult<T> = Result<T, SimulateError>;
