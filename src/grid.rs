//! The cell grid every maze is built on, plus the position and direction
//! value types used to address it.

use crate::error::{valid_dimensions, MazeError};

/// State of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Wall,
    Open,
    Trap,
}

/// A `(row, col)` address into a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts by a signed delta, returning `None` if either coordinate would
    /// go negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// The neighbouring position one step in `dir`.
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (d_row, d_col) = dir.delta();
        self.offset(d_row, d_col)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta for a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Fixed-size rectangular grid of [`CellState`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// Creates an all-wall grid. Both dimensions must be odd and at least 5.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if !valid_dimensions(width, height) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![CellState::Wall; width]; height],
        })
    }

    /// Builds a grid from explicit rows. Unlike [`Grid::new`] this accepts
    /// any non-empty rectangular shape.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidLayout {
                reason: "grid has no cells".to_string(),
            });
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(MazeError::InvalidLayout {
                reason: format!("row {} has {} cells, expected {}", row, rows[row].len(), width),
            });
        }
        Ok(Self {
            width,
            height,
            cells: rows,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// `true` for cells off the outer border ring.
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row > 0 && pos.col > 0 && pos.row < self.height - 1 && pos.col < self.width - 1
    }

    /// State at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrites the state at `pos`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, state: CellState) {
        if let Some(cell) = self.cells.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
            *cell = state;
        }
    }

    /// Resets every cell to `state`.
    pub fn fill(&mut self, state: CellState) {
        for row in &mut self.cells {
            row.fill(state);
        }
    }

    /// Row-major iterator over every position in the grid.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position { row, col }))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == state)
            .count()
    }

    /// Flat index used by per-cell side tables such as visited maps.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }
}
