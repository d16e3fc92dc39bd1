//! Path simulation — folds tokens into the sequence of walker states.
//!
//! The output always starts with the initial state `(start, North)` and has
//! exactly one further state per token, so its length is `tokens + 1`.

use serde::Serialize;
use trek_lexer::{tokenize, Lexer, Token};
use trek_types::{MovementModel, PathSource, Position, State};

use crate::error::{SimResult, SimulateError};
use crate::step::step;

/// Walk `path` from `start` under `model`.
///
/// Text outside the token grammar is skipped, so this never fails. Call
/// [`trek_lexer::validate`] first, or use [`simulate_strict`], when such
/// text must be rejected instead.
pub fn simulate(path: &str, model: MovementModel, start: Position) -> Vec<State> {
    let tokens = tokenize(path);
    simulate_tokens(&tokens, model, start)
}

/// [`simulate`] starting at the origin.
pub fn simulate_from_origin(path: &str, model: MovementModel) -> Vec<State> {
    simulate(path, model, Position::ORIGIN)
}

/// Like [`simulate`], but refuses any path the validator would reject.
pub fn simulate_strict(path: &str, model: MovementModel, start: Position) -> SimResult<Vec<State>> {
    let source = PathSource::new(path);
    let lexed = Lexer::new(&source).lex();
    if !lexed.is_valid() {
        return Err(SimulateError::InvalidPath(lexed.errors));
    }
    Ok(simulate_tokens(&lexed.tokens, model, start))
}

/// Fold an already-lexed token sequence into states.
pub fn simulate_tokens(tokens: &[Token], model: MovementModel, start: Position) -> Vec<State> {
    log::debug!(
        "simulating {} token(s) under {} from {}",
        tokens.len(),
        model,
        start
    );

    let initial = State::initial(start);
    let moves = tokens.iter().scan(initial, |state, token| {
        let next = step(model, *state, token);
        log::trace!("{token}: {state} -> {next}");
        *state = next;
        Some(next)
    });

    std::iter::once(initial).chain(moves).collect()
}

/// Straight-line distance between the first and last states.
///
/// An empty slice has distance zero.
pub fn distance(states: &[State]) -> f64 {
    match (states.first(), states.last()) {
        (Some(first), Some(last)) => first.position.distance_to(&last.position),
        _ => 0.0,
    }
}

// ─────────────────────────────────────────────────────────────────────
// Journey
// ─────────────────────────────────────────────────────────────────────

/// A finished simulation: the path walked, the model used, and every
/// state along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey {
    pub path: String,
    pub model: MovementModel,
    pub states: Vec<State>,
}

impl Journey {
    /// Simulate `path` leniently (see [`simulate`]).
    pub fn walk(path: impl Into<String>, model: MovementModel, start: Position) -> Self {
        let path = path.into();
        let states = simulate(&path, model, start);
        Self {
            path,
            model,
            states,
        }
    }

    /// Simulate `path`, rejecting it if it does not validate.
    pub fn walk_strict(
        path: impl Into<String>,
        model: MovementModel,
        start: Position,
    ) -> SimResult<Self> {
        let path = path.into();
        let states = simulate_strict(&path, model, start)?;
        Ok(Self {
            path,
            model,
            states,
        })
    }

    /// The initial state.
    pub fn start(&self) -> State {
        self.states.first().copied().unwrap_or_default()
    }

    /// The state after the last token.
    pub fn end(&self) -> State {
        self.states.last().copied().unwrap_or_default()
    }

    /// Number of moves made (tokens consumed).
    pub fn moves(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Straight-line distance from start to end.
    pub fn distance(&self) -> f64 {
        distance(&self.states)
    }
}
