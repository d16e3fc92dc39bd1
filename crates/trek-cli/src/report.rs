//! Rendering a finished journey.

use serde::Serialize;
use std::io::Write;
use trek_eval::Journey;
use trek_types::{MovementModel, State};

use crate::error::CliError;

/// Plain-text report.
///
/// ```text
/// Adventurer Journey
/// Path: 15F6B6B5L16R8B16F20L6F13F11R
/// Model: turn-then-move
/// End Coords & Direction: (34, -4, 'S')
/// Distance: 34.23448553724738
/// ```
pub fn write_text<W: Write>(out: &mut W, journey: &Journey, verbose: bool) -> Result<(), CliError> {
    writeln!(out, "Adventurer Journey")?;
    writeln!(out, "Path: {}", journey.path)?;
    writeln!(out, "Model: {}", journey.model)?;
    if verbose {
        writeln!(out, "Coords:")?;
        for state in &journey.states {
            writeln!(out, "{} direction={}", state.position, state.heading)?;
        }
    }
    writeln!(out, "End Coords & Direction: {}", journey.end())?;
    writeln!(out, "Distance: {:?}", journey.distance())?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    model: MovementModel,
    start: State,
    end: State,
    distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    states: Option<&'a [State]>,
}

/// JSON report; `states` is included only when `verbose`.
pub fn write_json<W: Write>(out: &mut W, journey: &Journey, verbose: bool) -> Result<(), CliError> {
    let report = JsonReport {
        path: &journey.path,
        model: journey.model,
        start: journey.start(),
        end: journey.end(),
        distance: journey.distance(),
        states: verbose.then_some(journey.states.as_slice()),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
