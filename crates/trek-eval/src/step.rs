//! The walker's transition function.
//!
//! [`step`] maps one state and one token to the next state. Everything else
//! in the simulator is a fold of this function over a token sequence.

use trek_lexer::{Direction, Token};
use trek_types::{Heading, MovementModel, State};

/// Apply `token` to `state` under `model`.
pub fn step(model: MovementModel, state: State, token: &Token) -> State {
    match model {
        MovementModel::TurnThenMove => turn_then_move(state, token),
        MovementModel::FixedAxes => fixed_axes(state, token),
    }
}

/// Rotate according to the direction letter, then advance along the new
/// heading. A zero step count still rotates.
fn turn_then_move(state: State, token: &Token) -> State {
    let heading = match token.direction {
        Direction::Forward => state.heading,
        Direction::Back => state.heading.reverse(),
        Direction::Right => state.heading.turn_right(),
        Direction::Left => state.heading.turn_left(),
    };
    State::new(state.position.advance(heading, token.magnitude), heading)
}

/// Move along a fixed axis: F/B on y, R/L on x. The walker always ends up
/// facing North, whatever heading it arrived with.
fn fixed_axes(state: State, token: &Token) -> State {
    let axis = match token.direction {
        Direction::Forward => Heading::North,
        Direction::Back => Heading::South,
        Direction::Right => Heading::East,
        Direction::Left => Heading::West,
    };
    State::new(state.position.advance(axis, token.magnitude), Heading::North)
}
