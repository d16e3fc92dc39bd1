//! Walker geometry: lattice positions, cardinal headings, and states.
//!
//! Components are `i128`, wide enough that no sum of `u64` step counts
//! reaches the bounds. Offsets saturate there rather than wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────
// Position
// ─────────────────────────────────────────────────────────────────────

/// A point on the integer lattice. North is `+y`, East is `+x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i128,
    pub y: i128,
}

impl Position {
    /// `(0, 0)`, the default starting point.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i128, y: i128) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`.
    pub fn offset(self, dx: i128, dy: i128) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Move `steps` units along `heading`'s unit vector.
    pub fn advance(self, heading: Heading, steps: u64) -> Self {
        let steps = i128::from(steps);
        let (ux, uy) = heading.unit_vector();
        self.offset(ux * steps, uy * steps)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x.saturating_sub(self.x) as f64;
        let dy = other.y.saturating_sub(self.y) as f64;
        dx.hypot(dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error returned when a position cannot be parsed from `"x,y"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid position '{0}': expected two integers separated by a comma, e.g. 3,-4")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Position::new(x, y))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Heading
// ─────────────────────────────────────────────────────────────────────

/// One of the four cardinal directions.
///
/// The discriminants follow the cyclic order N, E, S, W, so adding one
/// (mod 4) is a clockwise quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    #[serde(rename = "N")]
    North = 0,
    #[serde(rename = "E")]
    East = 1,
    #[serde(rename = "S")]
    South = 2,
    #[serde(rename = "W")]
    West = 3,
}

impl Heading {
    /// All headings in clockwise order starting from North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position in the cyclic order (0 = North).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading at `index` mod 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// 90° clockwise.
    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// 90° counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// 180°.
    pub fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Unit step `(dx, dy)` when facing this way.
    pub fn unit_vector(self) -> (i128, i128) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// Single-letter label: `N`, `E`, `S` or `W`.
    pub fn label(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────

/// The walker's full condition at one point of a journey.
///
/// Serializes flat, as `{"x": .., "y": .., "heading": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "StateRecord", into = "StateRecord")]
pub struct State {
    pub position: Position,
    pub heading: Heading,
}

/// Wire form of [`State`]. `#[serde(flatten)]` buffers values in a way
/// that cannot hold `i128`, so the fields are spelled out here.
#[derive(Serialize, Deserialize)]
struct StateRecord {
    x: i128,
    y: i128,
    heading: Heading,
}

impl From<StateRecord> for State {
    fn from(record: StateRecord) -> Self {
        State::new(Position::new(record.x, record.y), record.heading)
    }
}

impl From<State> for StateRecord {
    fn from(state: State) -> Self {
        StateRecord {
            x: state.position.x,
            y: state.position.y,
            heading: state.heading,
        }
    }
}

impl State {
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The state every journey begins in: at `start`, facing North.
    pub fn initial(start: Position) -> Self {
        Self::new(start, Heading::North)
    }

    pub fn x(&self) -> i128 {
        self.position.x
    }

    pub fn y(&self) -> i128 {
        self.position.y
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, '{}')", self.x(), self.y(), self.heading)
    }
}
