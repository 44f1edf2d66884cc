//! Maze generation, solvability checks and session logic for a terminal
//! maze-escape game.
//!
//! A maze is carved with a randomized depth-first backtracker
//! ([`carver`]), then a key and traps are scattered over it
//! ([`placer`]) while the [`reachability`] oracle keeps a trap-free route
//! from the start through the key to the exit.

pub mod carver;
pub mod config;
pub mod error;
pub mod grid;
pub mod placer;
pub mod reachability;
pub mod session;

pub use config::MazeConfig;
pub use error::{Feature, MazeError};
pub use grid::{CellState, Direction, Grid, Position};
pub use placer::{CellSampler, FeaturePlacer, Placement, UniformCells};
pub use reachability::path_exists;
pub use session::{DynamicGame, MazeGame, MoveOutcome, PredefinedGame};
