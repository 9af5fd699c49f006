//! Key bindings.

use crossterm::event::KeyCode;
use timetravel_core::{Direction, Position};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arrow keys: cursor on the board, selection in the move list.
    Move(Direction),
    /// Enter or space: play at the cursor, or jump to the selected entry.
    Select,
    /// Digits 1-9: play at that square.
    PlayAt(Position),
    /// Tab: switch between board and move list.
    ToggleFocus,
    /// Home: jump to the empty board.
    Start,
    /// q or Esc.
    Quit,
}

/// Maps a key to a command. Unbound keys map to `None`.
pub fn command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
        KeyCode::Home => Some(Command::Start),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::PlayAt),
        _ => None,
    }
}
