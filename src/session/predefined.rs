use super::{Board, ExitRule, MazeGame, MoveOutcome};
use crate::error::MazeError;
use crate::grid::{CellState, Direction, Grid, Position};
use rand::RngCore;
use tracing::instrument;

/// The fixed practice maze: `#` wall, `.` floor, `X` trap, `K` key, `E` exit.
pub const PREDEFINED_LAYOUT: [&str; 7] = [
    "#########",
    "#.XK...##",
    "#.#..X.##",
    "#.X.XK..#",
    "#...XXX.#",
    "#XXX##XE#",
    "#########",
];

const PREDEFINED_START: Position = Position::new(1, 1);

/// A hand-drawn maze whose exit is a gate that only opens with a key.
#[derive(Debug, Clone)]
pub struct PredefinedGame {
    board: Board,
}

impl PredefinedGame {
    pub fn new() -> Result<Self, MazeError> {
        Self::from_layout(&PREDEFINED_LAYOUT, PREDEFINED_START)
    }

    /// Parses a layout drawn with the same glyphs as [`PREDEFINED_LAYOUT`].
    /// Exactly one exit and at least one key are required.
    pub fn from_layout(rows: &[&str], start: Position) -> Result<Self, MazeError> {
        let mut exit = None;
        let mut keys = Vec::new();
        let mut cells = Vec::with_capacity(rows.len());

        for (row, line) in rows.iter().enumerate() {
            let mut cell_row = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let state = match glyph {
                    '#' => CellState::Wall,
                    '.' => CellState::Open,
                    'X' => CellState::Trap,
                    'K' => {
                        keys.push(pos);
                        CellState::Open
                    }
                    'E' => {
                        if exit.replace(pos).is_some() {
                            return Err(layout_error("more than one exit"));
                        }
                        CellState::Open
                    }
                    other => return Err(layout_error(format!("unknown glyph {:?} at {:?}", other, pos))),
                };
                cell_row.push(state);
            }
            cells.push(cell_row);
        }

        let grid = Grid::from_rows(cells)?;
        let exit = exit.ok_or_else(|| layout_error("no exit"))?;
        if keys.is_empty() {
            return Err(layout_error("no key"));
        }
        if grid.get(start) != Some(CellState::Open) {
            return Err(layout_error(format!("start {:?} is not floor", start)));
        }
        Ok(Self {
            board: Board::new(grid, start, exit, keys),
        })
    }
}

fn layout_error(reason: impl Into<String>) -> MazeError {
    MazeError::InvalidLayout {
        reason: reason.into(),
    }
}

impl MazeGame for PredefinedGame {
    /// The layout never changes; this only restarts the round.
    #[instrument(skip_all)]
    fn generate(&mut self, _rng: &mut dyn RngCore) -> Result<(), MazeError> {
        self.board.restart();
        Ok(())
    }

    fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        self.board.resolve_move(dir, ExitRule::Gated)
    }

    fn grid(&self) -> &Grid {
        &self.board.grid
    }

    fn player_position(&self) -> Position {
        self.board.player
    }

    fn start_position(&self) -> Position {
        self.board.start
    }

    fn exit_position(&self) -> Position {
        self.board.exit
    }

    fn key_positions(&self) -> &[Position] {
        &self.board.keys
    }

    fn has_key(&self) -> bool {
        self.board.has_key
    }

    fn is_escaped(&self) -> bool {
        self.board.escaped
    }
}
