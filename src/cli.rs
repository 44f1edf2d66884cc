//! Command-line interface for maze-escape.

use clap::{Parser, ValueEnum};
use maze_escape::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use maze_escape::MazeConfig;
use std::path::PathBuf;

/// Find the key, dodge the traps, escape the maze.
#[derive(Parser, Debug)]
#[command(name = "maze-escape", version, long_about = None)]
pub struct Cli {
    /// Which maze to play
    #[arg(long, value_enum, env = "MAZE_VARIANT", default_value_t = Variant::Dynamic)]
    pub variant: Variant,

    /// Show traps and keys on the map
    #[arg(long, env = "MAZE_REVEAL")]
    pub reveal: bool,

    /// Maze width in cells (odd, at least 5)
    #[arg(long, env = "MAZE_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells (odd, at least 5)
    #[arg(long, env = "MAZE_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for reproducible mazes
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal belongs to the game)
    #[arg(long, env = "MAZE_LOG", default_value = "maze_escape.log")]
    pub log_file: PathBuf,
}

/// Maze variants.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Freshly generated maze with a random key and traps
    Dynamic,
    /// The fixed practice maze
    Predefined,
}

impl Cli {
    pub fn config(&self) -> MazeConfig {
        MazeConfig::with_size(self.width, self.height)
    }
}
