//! Key and trap placement that never leaves the maze unsolvable.

use crate::error::{Feature, MazeError};
use crate::grid::{CellState, Grid, Position};
use crate::reachability::path_exists;
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Default per-feature draw budget before placement gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 2_000;

/// One trap per this many grid cells.
pub const DEFAULT_TRAP_DIVISOR: usize = 10;

/// Source of candidate cells for placement.
pub trait CellSampler {
    fn sample(&mut self, grid: &Grid) -> Position;
}

/// Draws interior cells uniformly at random.
pub struct UniformCells<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> UniformCells<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> CellSampler for UniformCells<'_, R> {
    fn sample(&mut self, grid: &Grid) -> Position {
        Position::new(
            self.rng.gen_range(1..grid.height() - 1),
            self.rng.gen_range(1..grid.width() - 1),
        )
    }
}

/// Where the key and traps ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub key: Position,
    /// Trap cells in the order they were placed.
    pub traps: Vec<Position>,
    pub requested_traps: usize,
}

impl Placement {
    /// How many traps could not be placed within the attempt budget.
    pub fn shortfall(&self) -> usize {
        self.requested_traps.saturating_sub(self.traps.len())
    }
}

/// Places the key and traps on a carved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturePlacer {
    pub max_attempts: usize,
    pub trap_divisor: usize,
}

impl Default for FeaturePlacer {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            trap_divisor: DEFAULT_TRAP_DIVISOR,
        }
    }
}

impl FeaturePlacer {
    /// Number of traps requested for `grid`.
    pub fn trap_count(&self, grid: &Grid) -> usize {
        if self.trap_divisor == 0 {
            return 0;
        }
        grid.width() * grid.height() / self.trap_divisor
    }

    /// Places the key and then the traps, mutating `grid` to mark traps.
    #[instrument(skip(self, grid, sampler))]
    pub fn place<S: CellSampler>(
        &self,
        grid: &mut Grid,
        start: Position,
        exit: Position,
        sampler: &mut S,
    ) -> Result<Placement, MazeError> {
        let key = self.place_key(grid, start, exit, sampler)?;
        let requested_traps = self.trap_count(grid);
        let traps = self.place_traps(grid, start, exit, key, requested_traps, sampler);
        let placement = Placement {
            key,
            traps,
            requested_traps,
        };
        if placement.shortfall() > 0 {
            warn!(
                placed = placement.traps.len(),
                requested = requested_traps,
                "trap placement exhausted, placing fewer traps"
            );
        }
        debug!(?key, traps = placement.traps.len(), "features placed");
        Ok(placement)
    }

    /// Picks an open cell, distinct from `start` and `exit`, reachable from
    /// `start`.
    pub fn place_key<S: CellSampler>(
        &self,
        grid: &Grid,
        start: Position,
        exit: Position,
        sampler: &mut S,
    ) -> Result<Position, MazeError> {
        if !has_interior(grid) {
            return Err(exhausted(Feature::Key, 0));
        }
        for _ in 0..self.max_attempts {
            let candidate = sampler.sample(grid);
            if grid.is_interior(candidate)
                && grid.get(candidate) == Some(CellState::Open)
                && candidate != exit
                && candidate != start
                && path_exists(grid, start, candidate)
            {
                return Ok(candidate);
            }
        }
        Err(exhausted(Feature::Key, self.max_attempts))
    }

    /// Marks up to `count` traps, keeping `player -> key -> exit` walkable
    /// without crossing any of them. Stops early once a single trap uses up
    /// its attempt budget.
    pub fn place_traps<S: CellSampler>(
        &self,
        grid: &mut Grid,
        player: Position,
        exit: Position,
        key: Position,
        count: usize,
        sampler: &mut S,
    ) -> Vec<Position> {
        let mut traps = Vec::with_capacity(count);
        while traps.len() < count {
            match self.place_trap(grid, player, exit, key, sampler) {
                Ok(trap) => traps.push(trap),
                Err(err) => {
                    debug!(%err, placed = traps.len(), "giving up on remaining traps");
                    break;
                }
            }
        }
        traps
    }

    fn place_trap<S: CellSampler>(
        &self,
        grid: &mut Grid,
        player: Position,
        exit: Position,
        key: Position,
        sampler: &mut S,
    ) -> Result<Position, MazeError> {
        if !has_interior(grid) {
            return Err(exhausted(Feature::Trap, 0));
        }
        for _ in 0..self.max_attempts {
            let candidate = sampler.sample(grid);
            if !grid.is_interior(candidate)
                || grid.get(candidate) != Some(CellState::Open)
                || candidate == player
                || candidate == exit
                || candidate == key
            {
                continue;
            }

            grid.set(candidate, CellState::Trap);
            if path_exists(grid, player, key) && path_exists(grid, key, exit) {
                return Ok(candidate);
            }
            grid.set(candidate, CellState::Open);
        }
        Err(exhausted(Feature::Trap, self.max_attempts))
    }
}

/// Grids thinner than 3 cells have no interior to sample from.
fn has_interior(grid: &Grid) -> bool {
    grid.width() >= 3 && grid.height() >= 3
}

fn exhausted(feature: Feature, attempts: usize) -> MazeError {
    MazeError::PlacementExhausted { feature, attempts }
}
