use serde::Serialize;
use tracing::{debug, info};

use crate::Point;
use crate::board::Board;
use crate::capture::{self, Prisoners};
use crate::command::{Command, Move};
use crate::config::SessionConfig;
use crate::error::GoError;
use crate::liberty::LibertyAnalyzer;
use crate::star;
use crate::stone::{Cell, Stone};
use crate::turn::{PassCounts, Stage, TurnController};

/// Everything a UI needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    #[serde(flatten)]
    turn: TurnController,
    prisoners: Prisoners,
    last_captured: Vec<Point>,
}

impl GameState {
    fn new(board: Board, turn: TurnController) -> Self {
        GameState {
            board,
            turn,
            prisoners: Prisoners::new(),
            last_captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.turn.to_move()
    }

    pub fn stage(&self) -> Stage {
        self.turn.stage()
    }

    pub fn passes(&self) -> PassCounts {
        self.turn.passes()
    }

    pub fn prisoners(&self) -> Prisoners {
        self.prisoners
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    /// Stones removed by the most recent command; empty after a pass or reset.
    pub fn last_captured(&self) -> &[Point] {
        &self.last_captured
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub captured: Vec<Point>,
    pub state: GameState,
}

/// A single game. The only writer of its `GameState`.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    analyzer: LibertyAnalyzer,
    history: Vec<Move>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self, GoError> {
        config.validate()?;
        Ok(Self::create(config))
    }

    /// A 19x19 session.
    pub fn standard() -> Self {
        Self::create(SessionConfig::default())
    }

    /// Start from an arranged position with `to_move` to play.
    ///
    /// Every group on `board` must have a liberty. `reset` still returns to an
    /// empty board of the same size.
    pub fn with_position(board: Board, to_move: Stone) -> Result<Self, GoError> {
        let config = SessionConfig::new(board.size())?;
        let mut analyzer = LibertyAnalyzer::new();
        if has_dead_group(&board, &mut analyzer) {
            return Err(GoError::MalformedBoard);
        }

        let mut turn = TurnController::new();
        if to_move == Stone::White {
            // White to move is Black having just placed.
            turn.on_place()?;
        }

        Ok(GameSession {
            config,
            state: GameState::new(board, turn),
            analyzer,
            history: Vec::new(),
        })
    }

    /// Rebuild a session by playing `moves` from an empty board.
    pub fn replay(config: SessionConfig, moves: &[Move]) -> Result<Self, GoError> {
        let mut session = Self::new(config)?;
        for m in moves {
            if m.stone != session.state.to_move() {
                return Err(GoError::OutOfTurn);
            }
            match m.point {
                Some((row, col)) => {
                    session.attempt_move(row, col)?;
                }
                None => {
                    session.pass()?;
                }
            }
        }
        Ok(session)
    }

    fn create(config: SessionConfig) -> Self {
        GameSession {
            config,
            state: GameState::new(Board::new(config.size), TurnController::new()),
            analyzer: LibertyAnalyzer::new(),
            history: Vec::new(),
        }
    }

    // -- Accessors --

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn size(&self) -> u8 {
        self.config.size
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn to_move(&self) -> Stone {
        self.state.to_move()
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn prisoners(&self) -> Prisoners {
        self.state.prisoners
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Committed moves since creation or the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn star_points(&self) -> Vec<Point> {
        star::star_points(self.config.size)
    }

    // -- Commands --

    pub fn apply(&mut self, command: Command) -> Result<MoveOutcome, GoError> {
        match command {
            Command::Place((row, col)) => self.attempt_move(row, col),
            Command::Pass => {
                self.pass()?;
                Ok(self.outcome(Vec::new()))
            }
            Command::Reset => {
                self.reset();
                Ok(self.outcome(Vec::new()))
            }
        }
    }

    /// Place a stone for the side to move. On error nothing changes.
    pub fn attempt_move(&mut self, row: u8, col: u8) -> Result<MoveOutcome, GoError> {
        let point = (row, col);
        if self.state.turn.is_game_over() {
            return Err(self.reject(point, GoError::GameOver));
        }

        let stone = self.state.turn.to_move();
        let captured = match place_stone(&mut self.state.board, &mut self.analyzer, point, stone)
        {
            Ok(captured) => captured,
            Err(e) => return Err(self.reject(point, e)),
        };

        if let Err(e) = self.state.turn.on_place() {
            undo_placement(&mut self.state.board, point, stone, &captured);
            return Err(self.reject(point, e));
        }
        self.state.prisoners.add(stone, captured.len() as u32);
        self.state.last_captured = captured.clone();
        self.history.push(Move::play(stone, point));

        debug!(
            "{stone} plays {point:?}, captures {}, {} to move",
            captured.len(),
            self.state.to_move()
        );
        Ok(self.outcome(captured))
    }

    /// Would `attempt_move(row, col)` succeed right now?
    pub fn is_legal(&self, row: u8, col: u8) -> bool {
        if self.state.turn.is_game_over() {
            return false;
        }
        let mut board = self.state.board.clone();
        let mut analyzer = LibertyAnalyzer::new();
        place_stone(&mut board, &mut analyzer, (row, col), self.state.to_move()).is_ok()
    }

    pub fn pass(&mut self) -> Result<Stage, GoError> {
        let stone = self.state.turn.to_move();
        let stage = match self.state.turn.on_pass() {
            Ok(stage) => stage,
            Err(e) => {
                debug!("rejected pass by {stone}: {e}");
                return Err(e);
            }
        };

        self.state.last_captured.clear();
        self.history.push(Move::pass(stone));

        if stage == Stage::GameOver {
            info!("{stone} passes, game over after {} moves", self.history.len());
        } else {
            debug!("{stone} passes");
        }
        Ok(stage)
    }

    /// Back to an empty board, Black to move, no prisoners.
    pub fn reset(&mut self) {
        self.state = GameState::new(Board::new(self.config.size), TurnController::new());
        self.history.clear();
        info!("session reset to empty {0}x{0} board", self.config.size);
    }

    fn outcome(&self, captured: Vec<Point>) -> MoveOutcome {
        MoveOutcome {
            captured,
            state: self.snapshot(),
        }
    }

    fn reject(&self, point: Point, err: GoError) -> GoError {
        debug!("rejected {} at {point:?}: {err}", self.state.to_move());
        err
    }
}

/// Place `stone`, resolve captures, refuse suicide.
///
/// On error `board` is left exactly as it was, including any stones the
/// placement had captured.
fn place_stone(
    board: &mut Board,
    analyzer: &mut LibertyAnalyzer,
    point: Point,
    stone: Stone,
) -> Result<Vec<Point>, GoError> {
    if !board.get(point)?.is_empty() {
        return Err(GoError::Occupied);
    }

    board.set(point, Cell::from(stone))?;
    let captured = capture::resolve(board, analyzer, point, stone);

    if analyzer.liberties(board, point, stone).is_none() {
        // `captured` is empty here in practice: a capture always frees a neighbor.
        undo_placement(board, point, stone, &captured);
        return Err(GoError::Suicide);
    }

    Ok(captured)
}

/// Take back a placement made by `place_stone`: lift the stone and put the
/// captured opponent stones back.
fn undo_placement(board: &mut Board, point: Point, stone: Stone, captured: &[Point]) {
    board.fill_all(captured, stone.opp());
    board.clear_all(&[point]);
}

fn has_dead_group(board: &Board, analyzer: &mut LibertyAnalyzer) -> bool {
    let mut seen = vec![false; board.area()];
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let point = (row, col);
            let Some(stone) = board.stone_at(point) else {
                continue;
            };
            if seen[board.idx(point)] {
                continue;
            }
            let group = analyzer.group(board, point, stone);
            if group.is_dead() {
                return true;
            }
            for &p in &group.stones {
                seen[board.idx(p)] = true;
            }
        }
    }
    false
}
