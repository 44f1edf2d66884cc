//! Generation settings for the dynamic maze.

use crate::error::{valid_dimensions, MazeError};
use crate::placer::{FeaturePlacer, DEFAULT_MAX_ATTEMPTS, DEFAULT_TRAP_DIVISOR};

pub const DEFAULT_WIDTH: usize = 21;
pub const DEFAULT_HEIGHT: usize = 11;

/// Dimensions and placement budget for a generated maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// One trap per `trap_divisor` cells.
    pub trap_divisor: usize,
    /// Draws allowed per key or trap before placement gives up.
    pub max_attempts: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            trap_divisor: DEFAULT_TRAP_DIVISOR,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl MazeConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Fails fast on dimensions the carver cannot use.
    pub fn validate(&self) -> Result<(), MazeError> {
        if valid_dimensions(self.width, self.height) {
            Ok(())
        } else {
            Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn placer(&self) -> FeaturePlacer {
        FeaturePlacer {
            max_attempts: self.max_attempts,
            trap_divisor: self.trap_divisor,
        }
    }
}
