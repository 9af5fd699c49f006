//! First-class action types for tic-tac-toe.
//!
//! Actions are what the front ends send to the game: a click on a square
//! or a click on an entry of the move list. They carry intent only; the
//! game decides whether they change anything.

use super::Position;
use serde::{Deserialize, Serialize};

/// A user intent against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position of the viewed board.
    Play(Position),
    /// Show the board as it was after the given step.
    JumpTo(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::JumpTo(0) => write!(f, "jump to game start"),
            Action::JumpTo(step) => write!(f, "jump to move #{}", step),
        }
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The requested step is past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
