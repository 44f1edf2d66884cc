//! Path-existence queries over a [`Grid`].
//!
//! Walls and traps are both impassable here: a maze only counts as solvable
//! if the player can finish it without stepping on a trap.

use crate::grid::{CellState, Direction, Grid, Position};

fn is_walkable(grid: &Grid, pos: Position) -> bool {
    matches!(grid.get(pos), Some(CellState::Open))
}

/// Returns `true` if a trap-free walk leads from `start` to `end`.
pub fn path_exists(grid: &Grid, start: Position, end: Position) -> bool {
    if start == end {
        return true;
    }
    if !is_walkable(grid, start) {
        return false;
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let mut stack = vec![start];
    visited[grid.index(start)] = true;

    while let Some(pos) = stack.pop() {
        for dir in Direction::ALL {
            let Some(next) = pos.step(dir) else {
                continue;
            };
            if next == end {
                return is_walkable(grid, next);
            }
            if !is_walkable(grid, next) || visited[grid.index(next)] {
                continue;
            }
            visited[grid.index(next)] = true;
            stack.push(next);
        }
    }
    false
}

/// Row-major map of every cell reachable from `start` without crossing walls
/// or traps. Empty if `start` itself is not walkable.
pub fn reachable_from(grid: &Grid, start: Position) -> Vec<bool> {
    let mut seen = vec![false; grid.width() * grid.height()];
    if !is_walkable(grid, start) {
        return seen;
    }
    let mut stack = vec![start];
    seen[grid.index(start)] = true;

    while let Some(pos) = stack.pop() {
        for dir in Direction::ALL {
            let Some(next) = pos.step(dir) else {
                continue;
            };
            if !is_walkable(grid, next) || seen[grid.index(next)] {
                continue;
            }
            seen[grid.index(next)] = true;
            stack.push(next);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::*;

    fn corridor() -> Grid {
        // #####
        // #...#
        // #####
        Grid::from_rows(vec![
            vec![Wall; 5],
            vec![Wall, Open, Open, Open, Wall],
            vec![Wall; 5],
        ])
        .unwrap()
    }

    #[test]
    fn test_same_cell_is_trivially_reachable() {
        let grid = corridor();
        assert!(path_exists(&grid, Position::new(0, 0), Position::new(0, 0)));
        assert!(path_exists(&grid, Position::new(1, 2), Position::new(1, 2)));
    }

    #[test]
    fn test_open_corridor() {
        let grid = corridor();
        assert!(path_exists(&grid, Position::new(1, 1), Position::new(1, 3)));
        assert!(path_exists(&grid, Position::new(1, 3), Position::new(1, 1)));
    }

    #[test]
    fn test_trap_blocks_path() {
        let mut grid = corridor();
        grid.set(Position::new(1, 2), Trap);
        assert!(!path_exists(&grid, Position::new(1, 1), Position::new(1, 3)));
    }

    #[test]
    fn test_wall_targets_unreachable() {
        let grid = corridor();
        assert!(!path_exists(&grid, Position::new(1, 1), Position::new(0, 1)));
        assert!(!path_exists(&grid, Position::new(0, 1), Position::new(1, 1)));
        assert!(!path_exists(&grid, Position::new(1, 1), Position::new(7, 7)));
    }

    #[test]
    fn test_blocked_end_is_unreachable() {
        let mut grid = corridor();
        grid.set(Position::new(1, 3), Trap);
        assert!(!path_exists(&grid, Position::new(1, 1), Position::new(1, 3)));
        assert!(path_exists(&grid, Position::new(1, 1), Position::new(1, 2)));
    }

    #[test]
    fn test_reachable_from_marks_component() {
        let mut grid = corridor();
        grid.set(Position::new(1, 3), Trap);
        let seen = reachable_from(&grid, Position::new(1, 1));
        assert_eq!(seen.iter().filter(|&&s| s).count(), 2);
        assert!(seen[grid.index(Position::new(1, 2))]);
        assert!(!seen[grid.index(Position::new(1, 3))]);
        assert!(reachable_from(&grid, Position::new(0, 0)).iter().all(|&s| !s));
    }

    #[test]
    fn test_large_open_grid_does_not_overflow_stack() {
        let mut grid = Grid::new(401, 401).unwrap();
        let positions: Vec<_> = grid.positions().filter(|&p| grid.is_interior(p)).collect();
        for pos in positions {
            grid.set(pos, Open);
        }
        assert!(path_exists(&grid, Position::new(1, 1), Position::new(399, 399)));
    }
}
