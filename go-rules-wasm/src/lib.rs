use go_rules::{Command, GameSession, GoError, Point, SessionConfig, Stone};
use serde_json::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSession {
    inner: GameSession,
    last_error: Option<GoError>,
}

#[wasm_bindgen]
impl WasmSession {
    /// Sizes outside 1..=25 fall back to 19x19, and `last_error` says why.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        Self::build(SessionConfig::new(size))
    }

    /// Build from a JSON config such as `{"size": 13}`. A bad config falls
    /// back to 19x19 with the reason in `last_error`.
    pub fn from_config(json: &str) -> WasmSession {
        Self::build(SessionConfig::from_json(json))
    }

    // -- Commands --

    /// Place a stone for the side to move. Coordinates come straight from the
    /// pointer mapping, so negative values are possible and count as off the board.
    pub fn place(&mut self, row: i32, col: i32) -> bool {
        let result = to_point(row, col).and_then(|(r, c)| self.inner.attempt_move(r, c));
        self.record(result.map(|_| ()))
    }

    pub fn pass(&mut self) -> bool {
        let result = self.inner.pass();
        self.record(result.map(|_| ()))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
        self.last_error = None;
    }

    /// Run a text command (`place R C`, `pass`, `reset`).
    /// Returns the outcome as JSON, or `{ "error": "message" }`.
    pub fn dispatch(&mut self, command: &str) -> String {
        let result = command
            .parse::<Command>()
            .and_then(|cmd| self.inner.apply(cmd));
        match result {
            Ok(outcome) => {
                self.last_error = None;
                serde_json::to_string(&outcome).unwrap_or_else(|e| error_json(&e.to_string()))
            }
            Err(e) => {
                let message = error_json(&e.to_string());
                self.last_error = Some(e);
                message
            }
        }
    }

    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        to_point(row, col).is_ok_and(|(r, c)| self.inner.is_legal(r, c))
    }

    /// Message for the most recent rejected command, or empty string.
    pub fn last_error(&self) -> String {
        self.last_error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    // -- Accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        let cells: Vec<i8> = self
            .inner
            .board()
            .cells()
            .iter()
            .map(|c| c.to_int())
            .collect();
        js_sys::Int8Array::from(cells.as_slice())
    }

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn current_color(&self) -> i8 {
        self.inner.to_move().to_int()
    }

    pub fn prisoners_black(&self) -> u32 {
        self.inner.prisoners().get(Stone::Black)
    }

    pub fn prisoners_white(&self) -> u32 {
        self.inner.prisoners().get(Stone::White)
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    pub fn move_count(&self) -> usize {
        self.inner.history().len()
    }

    // -- JSON serialization (WASM boundary) --

    /// JSON array of `[row, col]` pairs removed by the last command.
    pub fn last_captured_json(&self) -> String {
        points_json(self.inner.state().last_captured())
    }

    pub fn state_json(&self) -> String {
        serde_json::to_string(self.inner.state()).unwrap_or_else(|e| error_json(&e.to_string()))
    }

    pub fn star_points_json(&self) -> String {
        points_json(&self.inner.star_points())
    }

    pub fn history_json(&self) -> String {
        serde_json::to_string(self.inner.history()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl WasmSession {
    fn build(config: Result<SessionConfig, GoError>) -> Self {
        match config.and_then(GameSession::new) {
            Ok(inner) => Self {
                inner,
                last_error: None,
            },
            Err(e) => Self {
                inner: GameSession::standard(),
                last_error: Some(e),
            },
        }
    }

    fn record(&mut self, result: Result<(), GoError>) -> bool {
        match result {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e);
                false
            }
        }
    }
}

fn to_point(row: i32, col: i32) -> Result<Point, GoError> {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) => Ok((r, c)),
        _ => Err(GoError::OutOfBounds),
    }
}

fn points_json(points: &[Point]) -> String {
    let pts: Vec<[u8; 2]> = points.iter().map(|&(r, c)| [r, c]).collect();
    serde_json::to_string(&pts).unwrap_or_else(|_| "[]".into())
}

fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}
