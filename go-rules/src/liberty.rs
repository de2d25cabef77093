use serde::Serialize;

use crate::Point;
use crate::board::Board;
use crate::stone::{Cell, Stone};

/// A connected group of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    fn empty(stone: Stone) -> Self {
        Group {
            stone,
            stones: Vec::new(),
            liberties: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// A non-empty group without liberties.
    pub fn is_dead(&self) -> bool {
        !self.stones.is_empty() && self.liberties.is_empty()
    }
}

/// Iterative flood fill over a board.
///
/// Keeps its visited marks and frontier between calls. Each call bumps
/// `epoch` instead of clearing the marks, so a fresh visited-set costs
/// nothing after the first call on a given board size.
#[derive(Debug, Clone, Default)]
pub struct LibertyAnalyzer {
    marks: Vec<u32>,
    epoch: u32,
    frontier: Vec<usize>,
}

impl LibertyAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liberties of the `stone` group containing `point`, or `None` when the group has none.
    ///
    /// A point that does not hold `stone` has no group and yields `None`.
    pub fn liberties(&mut self, board: &Board, point: Point, stone: Stone) -> Option<Vec<Point>> {
        let group = self.group(board, point, stone);
        if group.liberties.is_empty() {
            None
        } else {
            Some(group.liberties)
        }
    }

    /// Explore the `stone` group containing `point`.
    pub fn group(&mut self, board: &Board, point: Point, stone: Stone) -> Group {
        let mut group = Group::empty(stone);
        if board.stone_at(point) != Some(stone) {
            return group;
        }

        self.begin(board.area());
        let own = Cell::from(stone);
        let size = board.size() as usize;

        let start = board.idx(point);
        self.mark(start);
        self.frontier.push(start);

        while let Some(i) = self.frontier.pop() {
            let p = ((i / size) as u8, (i % size) as u8);
            group.stones.push(p);

            for n in board.neighbors(p) {
                let ni = board.idx(n);
                if self.is_marked(ni) {
                    continue;
                }
                match board.cell_at_idx(ni) {
                    Cell::Empty => {
                        self.mark(ni);
                        group.liberties.push(n);
                    }
                    c if c == own => {
                        self.mark(ni);
                        self.frontier.push(ni);
                    }
                    _ => {}
                }
            }
        }

        group
    }

    fn begin(&mut self, area: usize) {
        if self.marks.len() != area {
            self.marks = vec![0; area];
            self.epoch = 0;
        }
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.marks.fill(0);
            self.epoch = 1;
        }
        self.frontier.clear();
    }

    #[inline]
    fn mark(&mut self, i: usize) {
        self.marks[i] = self.epoch;
    }

    #[inline]
    fn is_marked(&self, i: usize) -> bool {
        self.marks[i] == self.epoch
    }
}
