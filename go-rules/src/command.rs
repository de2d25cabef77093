use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// An instruction from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Place(Point),
    Pass,
    Reset,
}

/// Text form: `place ROW COL`, `pass` or `reset`.
impl std::str::FromStr for Command {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = match words.next() {
            Some("place") => {
                let row = coordinate(words.next(), s)?;
                let col = coordinate(words.next(), s)?;
                Command::Place((row, col))
            }
            Some("pass") => Command::Pass,
            Some("reset") => Command::Reset,
            _ => return Err(GoError::ParseCommand(s.to_string())),
        };

        if words.next().is_some() {
            return Err(GoError::ParseCommand(s.to_string()));
        }
        Ok(cmd)
    }
}

/// Integers that do not fit a board coordinate are off the board, not unparseable.
fn coordinate(word: Option<&str>, input: &str) -> Result<u8, GoError> {
    let value: i64 = word
        .and_then(|w| w.parse().ok())
        .ok_or_else(|| GoError::ParseCommand(input.to_string()))?;
    u8::try_from(value).map_err(|_| GoError::OutOfBounds)
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place((row, col)) => write!(f, "place {row} {col}"),
            Command::Pass => write!(f, "pass"),
            Command::Reset => write!(f, "reset"),
        }
    }
}

/// A committed move: a placement when `point` is set, a pass otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub stone: Stone,
    pub point: Option<Point>,
}

impl Move {
    pub fn play(stone: Stone, point: Point) -> Self {
        Move {
            stone,
            point: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Move { stone, point: None }
    }

    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}
