//! Trek command-line shell.
//!
//! Validates the path, walks it, and prints the report. Holds no movement
//! logic of its own; see `trek-lexer` and `trek-eval`.

pub mod args;
pub mod error;
pub mod report;

pub use args::{Args, OutputFormat, RunConfig};
pub use error::CliError;

use std::io::Write;
use trek_eval::Journey;
use trek_lexer::{diagnose, validate};

/// Execute one run, writing the report to `out` and diagnostics to `err`.
pub fn run<W: Write, E: Write>(
    config: &RunConfig,
    out: &mut W,
    err: &mut E,
) -> Result<(), CliError> {
    if !validate(&config.path) {
        writeln!(err, "Invalid path format: {}", config.path)?;
        for error in diagnose(&config.path).errors {
            writeln!(err, "  {error}")?;
            if let Some(suggestion) = &error.suggestion {
                writeln!(err, "    help: {suggestion}")?;
            }
        }
        return Err(CliError::InvalidPath(config.path.clone()));
    }

    let journey = Journey::walk(config.path.as_str(), config.model, config.start);
    log::debug!(
        "walked {} move(s) under {}, ended at {}",
        journey.moves(),
        journey.model,
        journey.end()
    );

    match config.format {
        OutputFormat::Text => report::write_text(out, &journey, config.verbose),
        OutputFormat::Json => report::write_json(out, &journey, config.verbose),
    }
}
