//! Token types for the trek lexer.
//!
//! A path is a run of [`Token`]s, each a step count followed by one
//! [`Direction`] letter.

use std::fmt;
use trek_types::Span;

// ─────────────────────────────────────────────────────────────────────
// Direction
// ─────────────────────────────────────────────────────────────────────

/// The letter that closes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `F`
    Forward,
    /// `B`
    Back,
    /// `R`
    Right,
    /// `L`
    Left,
}

impl Direction {
    /// Recognise a direction letter, case-insensitively.
    pub fn from_byte(byte: u8) -> Option<Direction> {
        Some(match byte.to_ascii_uppercase() {
            b'F' => Direction::Forward,
            b'B' => Direction::Back,
            b'R' => Direction::Right,
            b'L' => Direction::Left,
            _ => return None,
        })
    }

    /// The canonical upper-case letter.
    pub fn letter(self) -> char {
        match self {
            Direction::Forward => 'F',
            Direction::Back => 'B',
            Direction::Right => 'R',
            Direction::Left => 'L',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single movement instruction, e.g. `16R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Number of steps. Digit runs too long for `u64` saturate.
    pub magnitude: u64,
    /// Which way to go.
    pub direction: Direction,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(magnitude: u64, direction: Direction, span: Span) -> Self {
        Self {
            magnitude,
            direction,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.direction)
    }
}
