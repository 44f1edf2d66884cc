//! Game sessions: player state and move resolution on top of a maze grid.
//!
//! Both the generated and the fixed maze speak the same [`MazeGame`]
//! protocol, so the game loop never needs to know which one it is driving.

mod dynamic;
mod predefined;

pub use dynamic::DynamicGame;
pub use predefined::{PredefinedGame, PREDEFINED_LAYOUT};

use crate::error::MazeError;
use crate::grid::{CellState, Direction, Grid, Position};
use rand::RngCore;
use tracing::debug;

/// Result of a single move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved,
    Blocked,
    FoundKey,
    Trapped,
    Escaped,
    NeedsKey,
}

impl MoveOutcome {
    /// Player-facing status line, if the outcome deserves one.
    pub fn message(self) -> Option<&'static str> {
        match self {
            MoveOutcome::Moved => None,
            MoveOutcome::Blocked => Some("There's a wall there!"),
            MoveOutcome::FoundKey => Some("You have found the key!"),
            MoveOutcome::Trapped => Some("You fell into a trap! Start over."),
            MoveOutcome::Escaped => Some("Congratulations! You have escaped the maze!"),
            MoveOutcome::NeedsKey => Some("You need the key to exit!"),
        }
    }
}

/// The protocol a game loop drives.
pub trait MazeGame {
    /// Builds (or rebuilds) the maze and puts the player back at the start.
    fn generate(&mut self, rng: &mut dyn RngCore) -> Result<(), MazeError>;

    fn move_player(&mut self, dir: Direction) -> MoveOutcome;

    fn grid(&self) -> &Grid;

    fn cell_state(&self, pos: Position) -> Option<CellState> {
        self.grid().get(pos)
    }

    fn player_position(&self) -> Position;

    fn start_position(&self) -> Position;

    fn exit_position(&self) -> Position;

    fn key_positions(&self) -> &[Position];

    fn has_key(&self) -> bool;

    /// `true` once the player has left through the exit.
    fn is_escaped(&self) -> bool;
}

/// What stepping onto the exit without the key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitRule {
    /// The exit is a gate that reports [`MoveOutcome::NeedsKey`].
    Gated,
    /// The exit is ordinary floor until the key is held.
    Floor,
}

/// Grid plus player state shared by both variants.
#[derive(Debug, Clone)]
struct Board {
    grid: Grid,
    start: Position,
    exit: Position,
    keys: Vec<Position>,
    player: Position,
    has_key: bool,
    escaped: bool,
}

impl Board {
    fn new(grid: Grid, start: Position, exit: Position, keys: Vec<Position>) -> Self {
        Self {
            grid,
            start,
            exit,
            keys,
            player: start,
            has_key: false,
            escaped: false,
        }
    }

    /// Puts the player back at the start without touching the grid.
    fn restart(&mut self) {
        self.player = self.start;
        self.has_key = false;
        self.escaped = false;
    }

    fn can_enter(&self, pos: Position) -> bool {
        matches!(self.grid.get(pos), Some(CellState::Open | CellState::Trap))
    }

    fn resolve_move(&mut self, dir: Direction, exit_rule: ExitRule) -> MoveOutcome {
        if self.escaped {
            return MoveOutcome::Escaped;
        }
        let Some(next) = self.player.step(dir).filter(|&p| self.can_enter(p)) else {
            return MoveOutcome::Blocked;
        };
        self.player = next;

        let outcome = if self.keys.contains(&next) {
            self.has_key = true;
            MoveOutcome::FoundKey
        } else if self.grid.get(next) == Some(CellState::Trap) {
            self.player = self.start;
            self.has_key = false;
            MoveOutcome::Trapped
        } else if next == self.exit && self.has_key {
            self.escaped = true;
            MoveOutcome::Escaped
        } else if next == self.exit && exit_rule == ExitRule::Gated {
            MoveOutcome::NeedsKey
        } else {
            MoveOutcome::Moved
        };
        if outcome != MoveOutcome::Moved {
            debug!(?dir, ?next, ?outcome, "move resolved");
        }
        outcome
    }
}
