pub mod board;
pub mod capture;
pub mod command;
pub mod config;
pub mod error;
pub mod liberty;
pub mod session;
pub mod star;
pub mod stone;
pub mod turn;

/// `(row, col)`, both counted from the top-left corner.
pub type Point = (u8, u8);

pub use board::Board;
pub use capture::Prisoners;
pub use command::{Command, Move};
pub use config::SessionConfig;
pub use error::GoError;
pub use liberty::{Group, LibertyAnalyzer};
pub use session::{GameSession, GameState, MoveOutcome};
pub use stone::{Cell, Stone};
pub use turn::{PassCounts, Stage, TurnController};
