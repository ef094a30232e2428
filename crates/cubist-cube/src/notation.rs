//! Move notation.
//!
//! A move token is a face letter followed by an optional modifier:
//!
//! | token | meaning                        |
//! |-------|--------------------------------|
//! | `R`   | quarter turn clockwise         |
//! | `R'`  | quarter turn counterclockwise  |
//! | `R2`  | half turn                      |
//!
//! The face letter is case-insensitive. Any other modifier is rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::Face;

/// Turning direction, as seen looking straight at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A parsed move: which face, which way, and how many quarter turns.
///
/// Half turns are always stored as two clockwise quarter turns, so `R2`
/// has exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Move {
    face: Face,
    direction: Direction,
    repeats: u8,
}

impl Move {
    /// A single quarter turn.
    pub const fn quarter(face: Face, direction: Direction) -> Self {
        Self {
            face,
            direction,
            repeats: 1,
        }
    }

    /// A half turn.
    pub const fn double(face: Face) -> Self {
        Self {
            face,
            direction: Direction::Clockwise,
            repeats: 2,
        }
    }

    /// The turned face.
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Turning direction.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of quarter turns: 1 or 2.
    pub const fn repeats(&self) -> u8 {
        self.repeats
    }

    /// Whether this is a half turn.
    pub const fn is_double(&self) -> bool {
        self.repeats == 2
    }

    /// The move that undoes this one.
    pub const fn inverse(&self) -> Self {
        if self.is_double() {
            *self
        } else {
            Self::quarter(self.face, self.direction.reversed())
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.repeats, self.direction) {
            (2, _) => write!(f, "{}2", self.face),
            (_, Direction::Clockwise) => write!(f, "{}", self.face),
            (_, Direction::CounterClockwise) => write!(f, "{}'", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<String> for Move {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        parse(&s)
    }
}

impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

fn invalid(token: &str, reason: &'static str) -> Error {
    Error::InvalidNotation {
        token: token.to_string(),
        reason,
    }
}

/// Parse a single move token such as `R`, `U'` or `D2`.
pub fn parse(notation: &str) -> Result<Move> {
    let mut chars = notation.chars();
    let first = chars.next().ok_or_else(|| invalid(notation, "empty token"))?;
    let face = Face::from_symbol(first).map_err(|_| invalid(notation, "unknown face"))?;

    match chars.as_str() {
        "" => Ok(Move::quarter(face, Direction::Clockwise)),
        "'" => Ok(Move::quarter(face, Direction::CounterClockwise)),
        "2" => Ok(Move::double(face)),
        _ => Err(invalid(notation, "unknown modifier")),
    }
}

/// Parse a whitespace-separated move sequence, e.g. solver output.
///
/// An empty or all-whitespace input is an empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>> {
    text.split_whitespace().map(parse).collect()
}
