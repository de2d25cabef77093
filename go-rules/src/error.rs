use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    Occupied,
    Suicide,
    GameOver,
    OutOfTurn,
    InvalidSize(u8),
    InvalidConfig(String),
    MalformedBoard,
    ParseCommand(String),
}

impl GoError {
    /// True for the errors a rejected command can produce. These leave the game untouched.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GoError::OutOfBounds | GoError::Occupied | GoError::Suicide | GoError::GameOver
        )
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "not on board"),
            GoError::Occupied => write!(f, "point is occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::GameOver => write!(f, "game is over"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::InvalidSize(size) => write!(f, "invalid board size: {size}"),
            GoError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            GoError::MalformedBoard => write!(f, "malformed board matrix"),
            GoError::ParseCommand(s) => write!(f, "invalid command: {s}"),
        }
    }
}

impl std::error::Error for GoError {}
