use super::{Board, ExitRule, MazeGame, MoveOutcome};
use crate::carver::{self, CARVE_START};
use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::grid::{Direction, Grid, Position};
use crate::placer::{Placement, UniformCells};
use rand::RngCore;
use tracing::{info, instrument};

/// A freshly carved maze with a random key and traps.
#[derive(Debug, Clone)]
pub struct DynamicGame {
    config: MazeConfig,
    board: Board,
    placement: Option<Placement>,
}

impl DynamicGame {
    /// Validates `config` and prepares an uncarved (all-wall) maze. Call
    /// [`MazeGame::generate`] before playing.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let exit = exit_for(&config);
        Ok(Self {
            config,
            board: Board::new(grid, CARVE_START, exit, Vec::new()),
            placement: None,
        })
    }

    /// Key and trap layout of the last generation.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }
}

fn exit_for(config: &MazeConfig) -> Position {
    Position::new(config.height - 2, config.width - 2)
}

impl MazeGame for DynamicGame {
    #[instrument(skip(self, rng), fields(width = self.config.width, height = self.config.height))]
    fn generate(&mut self, rng: &mut dyn RngCore) -> Result<(), MazeError> {
        let exit = exit_for(&self.config);
        let mut grid = carver::generate(self.config.width, self.config.height, &mut *rng)?;
        let placement = self.config.placer().place(
            &mut grid,
            CARVE_START,
            exit,
            &mut UniformCells::new(&mut *rng),
        )?;
        info!(
            key = ?placement.key,
            traps = placement.traps.len(),
            "dynamic maze ready"
        );
        self.board = Board::new(grid, CARVE_START, exit, vec![placement.key]);
        self.placement = Some(placement);
        Ok(())
    }

    fn move_player(&mut self, dir: Direction) -> MoveOutcome {
        self.board.resolve_move(dir, ExitRule::Floor)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use crate::reachability::path_exists;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generated(seed: u64) -> DynamicGame {
        let mut game = DynamicGame::new(MazeConfig::default()).unwrap();
        game.generate(&mut StdRng::seed_from_u64(seed)).unwrap();
        game
    }

    /// Walks along open cells (never traps) from the player to `target`.
    fn route(game: &DynamicGame, target: Position) -> Vec<Direction> {
        let grid = game.grid();
        let start = game.player_position();
        let mut came_from = vec![None; grid.width() * grid.height()];
        let mut queue = std::collections::VecDeque::from(vec![start]);
        let mut seen = vec![false; grid.width() * grid.height()];
        seen[grid.index(start)] = true;
        while let Some(pos) = queue.pop_front() {
            if pos == target {
                break;
            }
            for dir in Direction::ALL {
                let Some(next) = pos.step(dir) else { continue };
                if grid.get(next) != Some(CellState::Open) || seen[grid.index(next)] {
                    continue;
                }
                seen[grid.index(next)] = true;
                came_from[grid.index(next)] = Some((pos, dir));
                queue.push_back(next);
            }
        }
        let mut dirs = Vec::new();
        let mut cur = target;
        while let Some((prev, dir)) = came_from[grid.index(cur)] {
            dirs.push(dir);
            cur = prev;
        }
        dirs.reverse();
        dirs
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(DynamicGame::new(MazeConfig::with_size(10, 11)).is_err());
    }

    #[test]
    fn test_generate_positions() {
        let game = generated(1);
        assert_eq!(game.start_position(), Position::new(1, 1));
        assert_eq!(game.exit_position(), Position::new(9, 19));
        assert_eq!(game.player_position(), game.start_position());
        assert_eq!(game.key_positions().len(), 1);
        assert!(!game.has_key());

        let key = game.key_positions()[0];
        assert!(path_exists(game.grid(), game.start_position(), key));
        assert!(path_exists(game.grid(), key, game.exit_position()));
    }

    #[test]
    fn test_exit_without_key_is_plain_floor() {
        let mut game = generated(2);
        let exit = game.exit_position();
        // Move the key out of the way so the walk cannot pick it up.
        game.board.keys = vec![Position::new(0, 0)];
        let path = route(&game, exit);
        assert!(!path.is_empty());
        let mut last = MoveOutcome::Blocked;
        for dir in path {
            last = game.move_player(dir);
        }
        assert_eq!(game.player_position(), exit);
        assert_eq!(last, MoveOutcome::Moved);
        assert!(!game.is_escaped());
    }

    #[test]
    fn test_collect_key_then_escape() {
        let mut game = generated(3);
        let key = game.key_positions()[0];
        let exit = game.exit_position();

        let mut outcomes = Vec::new();
        for dir in route(&game, key) {
            outcomes.push(game.move_player(dir));
        }
        assert_eq!(outcomes.last(), Some(&MoveOutcome::FoundKey));
        assert!(game.has_key());

        for dir in route(&game, exit) {
            outcomes.push(game.move_player(dir));
        }
        assert_eq!(outcomes.last(), Some(&MoveOutcome::Escaped));
        assert!(game.is_escaped());
        assert!(!outcomes.contains(&MoveOutcome::Trapped));

        // Finished sessions ignore further input.
        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Escaped);
        assert_eq!(game.player_position(), exit);
    }

    #[test]
    fn test_border_blocks() {
        let mut game = generated(4);
        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(game.player_position(), Position::new(1, 1));
    }

    #[test]
    fn test_regenerate_resets_player() {
        let mut game = generated(5);
        let key = game.key_positions()[0];
        for dir in route(&game, key) {
            game.move_player(dir);
        }
        assert!(game.has_key());
        game.generate(&mut StdRng::seed_from_u64(6)).unwrap();
        assert!(!game.has_key());
        assert_eq!(game.player_position(), game.start_position());
    }
}
