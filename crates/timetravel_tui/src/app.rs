//! Application state and key handling.

use crate::input::{self, Command};
use crossterm::event::KeyCode;
use timetravel_core::{Action, Direction, Game, Position};
use tracing::debug;

/// Which panel arrow keys drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The live board.
    Board,
    /// The move list.
    History,
}

/// Main application state.
///
/// The game value is replaced on every accepted action; cursor, focus and
/// list selection are presentation only.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = input::command(key) {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: Command) {
        debug!(?command, focus = ?self.focus, "Handling command");

        match (self.focus, command) {
            (_, Command::Quit) => self.should_quit = true,
            (_, Command::ToggleFocus) => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.game.step();
            }
            (_, Command::Start) => self.dispatch(Action::JumpTo(0)),
            (_, Command::PlayAt(pos)) => {
                self.cursor = pos;
                self.dispatch(Action::Play(pos));
            }
            (Focus::Board, Command::Move(direction)) => self.cursor = self.cursor.step(direction),
            (Focus::Board, Command::Select) => self.dispatch(Action::Play(self.cursor)),
            (Focus::History, Command::Move(Direction::Up)) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (Focus::History, Command::Move(Direction::Down)) => {
                let last = self.game.history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            (Focus::History, Command::Move(_)) => {}
            (Focus::History, Command::Select) => self.dispatch(Action::JumpTo(self.selected)),
        }
    }

    fn dispatch(&mut self, action: Action) {
        self.game = self.game.apply(action);
        self.selected = self.game.step();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
