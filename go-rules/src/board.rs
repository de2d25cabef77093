use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::Point;
use crate::error::GoError;
use crate::stone::{Cell, Stone};

/// Square Go board stored as a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Vec<Cell>,
    size: u8,
}

impl Board {
    /// Create an empty board with `size` rows and columns.
    pub fn new(size: u8) -> Self {
        Board {
            cells: vec![Cell::Empty; size as usize * size as usize],
            size,
        }
    }

    /// Build a board from a square matrix of rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GoError> {
        let size = u8::try_from(rows.len()).map_err(|_| GoError::MalformedBoard)?;
        if rows.iter().any(|row| row.len() != size as usize) {
            return Err(GoError::MalformedBoard);
        }

        Ok(Board {
            cells: rows.into_iter().flatten().collect(),
            size,
        })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Flat row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Nested row-major copy of the grid.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size.max(1) as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    pub fn in_bounds(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn get(&self, point: Point) -> Result<Cell, GoError> {
        self.check(point).map(|i| self.cells[i])
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.get(point).ok().and_then(Cell::stone)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        let cell = Cell::from(stone);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    // -- Mutation (session-owned) --

    pub(crate) fn set(&mut self, point: Point, cell: Cell) -> Result<(), GoError> {
        let i = self.check(point)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Clear every stone in `points`.
    pub(crate) fn clear_all(&mut self, points: &[Point]) {
        for &p in points {
            let i = self.idx(p);
            self.cells[i] = Cell::Empty;
        }
    }

    /// Put `stone` back on every point in `points`.
    pub(crate) fn fill_all(&mut self, points: &[Point], stone: Stone) {
        for &p in points {
            let i = self.idx(p);
            self.cells[i] = Cell::from(stone);
        }
    }

    // -- Geometry --

    /// Orthogonal neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    pub(crate) fn area(&self) -> usize {
        self.cells.len()
    }

    /// Flattened index `row * size + col`. Caller guarantees the point is on the board.
    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    #[inline]
    pub(crate) fn cell_at_idx(&self, i: usize) -> Cell {
        self.cells[i]
    }

    fn check(&self, point: Point) -> Result<usize, GoError> {
        if self.in_bounds(point) {
            Ok(self.idx(point))
        } else {
            Err(GoError::OutOfBounds)
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.max(1) as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

/// Parses the `Display` layout. `X`/`B` are black, `O`/`W` white, anything else empty.
impl FromStr for Board {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        'X' | 'B' => Cell::Black,
                        'O' | 'W' => Cell::White,
                        _ => Cell::Empty,
                    })
                    .collect()
            })
            .collect();
        Board::from_rows(rows)
    }
}
