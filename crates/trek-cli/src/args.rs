//! Command-line arguments and the run configuration resolved from them.

use clap::{Parser, ValueEnum};
use trek_types::{MovementModel, Position, DEFAULT_PATH};

/// Adventurer journey distance calculator.
///
/// Parses a path such as `15F6B6B5L` (step count + F/B/R/L), walks it, and
/// reports where the walker ended up and how far that is from the start.
#[derive(Parser, Debug)]
#[command(name = "trek", author, version, about, long_about = None)]
pub struct Args {
    /// Path as a string (e.g. "15F6B..."); the built-in path when omitted
    #[arg(short, long)]
    pub path: Option<String>,

    /// Use the fixed-axes movement model (turn-then-move is the default)
    #[arg(long)]
    pub fixed_axes: bool,

    /// Print every intermediate state
    #[arg(short, long)]
    pub verbose: bool,

    /// Starting coordinate as X,Y
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    pub start: Position,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// A single JSON object
    Json,
}

/// Everything one run needs, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub path: String,
    pub model: MovementModel,
    pub start: Position,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            model: MovementModel::default(),
            start: Position::ORIGIN,
            verbose: false,
            format: OutputFormat::Text,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        // An empty --path falls back to the default as well.
        let path = args
            .path
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PATH.to_string());
        Self {
            path,
            model: MovementModel::from_fixed_axes(args.fixed_axes),
            start: args.start,
            verbose: args.verbose,
            format: args.format,
        }
    }
}
