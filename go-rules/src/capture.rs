use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Point;
use crate::board::Board;
use crate::liberty::LibertyAnalyzer;
use crate::stone::Stone;

/// Prisoners indexed by the color that captured them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prisoners {
    pub black: u32,
    pub white: u32,
}

impl Prisoners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Remove every opponent group left without liberties by `stone` at `point`.
///
/// `board` must already hold the new stone. Each neighboring opponent group
/// is analyzed once; dead groups are cleared whole. Returns the cleared
/// points, which the caller credits to `stone` as prisoners.
pub fn resolve(
    board: &mut Board,
    analyzer: &mut LibertyAnalyzer,
    point: Point,
    stone: Stone,
) -> Vec<Point> {
    let opponent = stone.opp();
    let mut captured = Vec::new();
    let mut alive: Vec<Point> = Vec::new();

    for n in board.neighbors(point) {
        if board.stone_at(n) != Some(opponent) || alive.contains(&n) {
            continue;
        }

        let group = analyzer.group(board, n, opponent);
        if group.is_dead() {
            trace!(
                "{stone} at {point:?} captures {} {opponent} stone(s)",
                group.len()
            );
            board.clear_all(&group.stones);
            captured.extend(group.stones);
        } else {
            alive.extend(group.stones);
        }
    }

    captured
}
