use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GoError;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BlackToMove => write!(f, "black_to_move"),
            Stage::WhiteToMove => write!(f, "white_to_move"),
            Stage::GameOver => write!(f, "game_over"),
        }
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black_to_move" => Ok(Stage::BlackToMove),
            "white_to_move" => Ok(Stage::WhiteToMove),
            "game_over" => Ok(Stage::GameOver),
            _ => Err(format!("unknown stage: {s}")),
        }
    }
}

/// Consecutive passes per color since the last placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PassCounts {
    pub black: u32,
    pub white: u32,
}

impl PassCounts {
    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn increment(&mut self, stone: Stone) {
        match stone {
            Stone::Black => self.black += 1,
            Stone::White => self.white += 1,
        }
    }
}

/// Whose move it is, the pass streak, and whether the game has ended.
///
/// `GameOver` is terminal: only `reset` leaves it. After the game ends
/// `to_move` still names the color that made the final pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnController {
    to_move: Stone,
    passes: PassCounts,
    game_over: bool,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    pub fn new() -> Self {
        TurnController {
            to_move: Stone::Black,
            passes: PassCounts::default(),
            game_over: false,
        }
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn passes(&self) -> PassCounts {
        self.passes
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn stage(&self) -> Stage {
        if self.game_over {
            return Stage::GameOver;
        }
        match self.to_move {
            Stone::Black => Stage::BlackToMove,
            Stone::White => Stage::WhiteToMove,
        }
    }

    /// A stone was placed by the side to move.
    pub fn on_place(&mut self) -> Result<Stage, GoError> {
        if self.game_over {
            return Err(GoError::GameOver);
        }
        self.passes = PassCounts::default();
        self.to_move = self.to_move.opp();
        Ok(self.stage())
    }

    /// The side to move passed. A pass answering the other color's pass ends the game.
    pub fn on_pass(&mut self) -> Result<Stage, GoError> {
        if self.game_over {
            return Err(GoError::GameOver);
        }
        let stone = self.to_move;
        self.passes.increment(stone);
        if self.passes.get(stone.opp()) >= 1 {
            self.game_over = true;
        } else {
            self.to_move = stone.opp();
        }
        Ok(self.stage())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
