//! Shared types for trek.
//!
//! This crate defines the lattice geometry, movement models, source spans,
//! and diagnostic types used by the lexer, the simulator and the CLI.

mod error;
mod geometry;
mod model;
mod span;

pub use error::{ErrorCategory, ErrorCode, PathError, PathErrors, MAX_ERRORS};
pub use geometry::{Heading, ParsePositionError, Position, State};
pub use model::MovementModel;
pub use span::{PathSource, Span};

/// The path walked when the caller supplies none.
pub const DEFAULT_PATH: &str = "15F6B6B5L16R8B16F20L6F13F11R";
