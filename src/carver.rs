//! Randomized depth-first carving ("recursive backtracker").

use crate::error::MazeError;
use crate::grid::{CellState, Grid, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Where carving always begins. Also the player's start cell.
pub const CARVE_START: Position = Position::new(1, 1);

const STEPS: [(isize, isize); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Creates a `width` x `height` grid and carves a perfect maze into it.
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    carve(&mut grid, rng);
    debug!(open = grid.count(CellState::Open), "maze carved");
    Ok(grid)
}

/// Carves a perfect maze into `grid` in place, starting from [`CARVE_START`].
///
/// Every cell is reset to wall first. Afterwards each interior cell at odd
/// `(row, col)` is open and the open cells form a single tree.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.fill(CellState::Wall);
    grid.set(CARVE_START, CellState::Open);
    let mut stack = vec![CARVE_START];

    while let Some(&current) = stack.last() {
        let mut steps = STEPS;
        steps.shuffle(rng);

        let next = steps.iter().find_map(|&(d_row, d_col)| {
            let candidate = current.offset(d_row, d_col)?;
            let fresh = grid.is_interior(candidate) && grid.get(candidate) == Some(CellState::Wall);
            fresh.then_some((candidate, d_row, d_col))
        });

        match next {
            Some((candidate, d_row, d_col)) => {
                grid.set(candidate, CellState::Open);
                if let Some(passage) = current.offset(d_row / 2, d_col / 2) {
                    grid.set(passage, CellState::Open);
                }
                stack.push(candidate);
            }
            None => {
                stack.pop();
            }
        }
    }
}
