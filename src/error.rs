//! Error types for maze construction and feature placement.

use derive_more::{Display, Error};

/// Smallest odd side length the carver and placer accept.
pub const MIN_DIMENSION: usize = 5;

/// Which feature a placement attempt was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Feature {
    /// The single key the player must collect.
    #[display("key")]
    Key,
    /// One of the trap cells.
    #[display("trap")]
    Trap,
}

/// Errors raised while building or populating a maze.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MazeError {
    /// Width or height is even or smaller than [`MIN_DIMENSION`].
    #[display("invalid maze dimensions {width}x{height}: both must be odd and at least 5")]
    InvalidDimensions { width: usize, height: usize },

    /// No qualifying cell was found within the attempt budget.
    #[display("could not place {feature} after {attempts} attempts")]
    PlacementExhausted { feature: Feature, attempts: usize },

    /// A grid literal was empty or ragged.
    #[display("invalid maze layout: {reason}")]
    InvalidLayout { reason: String },
}

/// Returns `true` when `width` x `height` can hold a carved maze.
pub fn valid_dimensions(width: usize, height: usize) -> bool {
    width >= MIN_DIMENSION && height >= MIN_DIMENSION && width % 2 == 1 && height % 2 == 1
}
