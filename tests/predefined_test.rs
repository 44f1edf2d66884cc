//! Walkthroughs of the fixed practice maze.

use maze_escape::{Direction, MazeGame, MoveOutcome, Position, PredefinedGame};

use Direction::*;

/// Start -> key at (1, 3) without touching a trap.
const TO_KEY: [Direction; 8] = [Down, Down, Down, Right, Right, Up, Up, Up];

/// Start -> exit at (5, 7) while skipping the key cell.
const TO_EXIT_WITHOUT_KEY: [Direction; 16] = [
    Down, Down, Down, Right, Right, Up, Up, Right, Up, Right, Right, Down, Down, Right, Down, Down,
];

/// Key at (1, 3) -> exit at (5, 7).
const KEY_TO_EXIT: [Direction; 8] = [Right, Right, Right, Down, Down, Right, Down, Down];

fn walk(game: &mut PredefinedGame, moves: &[Direction]) -> Vec<MoveOutcome> {
    moves.iter().map(|&dir| game.move_player(dir)).collect()
}

#[test]
fn test_trap_resets_player() {
    let mut game = PredefinedGame::new().unwrap();
    assert_eq!(game.move_player(Right), MoveOutcome::Trapped);
    assert_eq!(game.player_position(), Position::new(1, 1));
    assert!(!game.has_key());
}

#[test]
fn test_trap_clears_key() {
    let mut game = PredefinedGame::new().unwrap();
    walk(&mut game, &TO_KEY);
    assert!(game.has_key());

    // (1, 2) is a trap right next to the key.
    assert_eq!(game.move_player(Left), MoveOutcome::Trapped);
    assert_eq!(game.player_position(), Position::new(1, 1));
    assert!(!game.has_key());
}

#[test]
fn test_key_pickup() {
    let mut game = PredefinedGame::new().unwrap();
    let outcomes = walk(&mut game, &TO_KEY);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::FoundKey));
    assert!(outcomes[..outcomes.len() - 1]
        .iter()
        .all(|&o| o == MoveOutcome::Moved));
    assert_eq!(game.player_position(), Position::new(1, 3));
    assert!(game.has_key());
}

#[test]
fn test_exit_needs_key() {
    let mut game = PredefinedGame::new().unwrap();
    let outcomes = walk(&mut game, &TO_EXIT_WITHOUT_KEY);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::NeedsKey));
    assert_eq!(game.player_position(), Position::new(5, 7));
    assert!(!game.is_escaped());
    assert!(!outcomes.contains(&MoveOutcome::Trapped));
}

#[test]
fn test_escape_with_key() {
    let mut game = PredefinedGame::new().unwrap();
    walk(&mut game, &TO_KEY);
    let outcomes = walk(&mut game, &KEY_TO_EXIT);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Escaped));
    assert!(game.is_escaped());
    assert_eq!(
        MoveOutcome::Escaped.message(),
        Some("Congratulations! You have escaped the maze!")
    );
}

#[test]
fn test_walls_block() {
    let mut game = PredefinedGame::new().unwrap();
    assert_eq!(game.move_player(Up), MoveOutcome::Blocked);
    assert_eq!(game.move_player(Left), MoveOutcome::Blocked);
    assert_eq!(game.player_position(), Position::new(1, 1));
    assert_eq!(MoveOutcome::Blocked.message(), Some("There's a wall there!"));
}
