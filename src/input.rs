//! Keyboard mapping for the game loop.

use crossterm::event::KeyCode;
use maze_escape::Direction;

/// What a key press asks the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Confirm,
    Quit,
    Ignore,
}

/// Maps WASD, arrows and vi keys to moves; Enter confirms; `q`/Esc quits.
pub fn command_for(code: KeyCode) -> Command {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Command::Move(Direction::Right),
        KeyCode::Enter => Command::Confirm,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => Command::Ignore,
    }
}
