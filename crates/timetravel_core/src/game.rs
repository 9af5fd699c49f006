//! The game value: full history plus the step being viewed.
//!
//! `Game` is immutable from the outside. Every transition borrows the
//! current value and returns a new one, so front ends can keep the old
//! value around (yew reducers do) and tests never need a UI harness.

use super::action::{Action, MoveError};
use super::rules::{self, Line, StepChange};
use super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// The viewed board has a completed line.
    Won {
        /// Owner of the line.
        winner: Player,
        /// The first completed line.
        line: Line,
    },
    /// The viewed board is full with no line.
    Draw,
    /// Play continues.
    InProgress {
        /// Player to move next.
        next: Player,
    },
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// Tic-tac-toe game with time travel.
///
/// Only the history and the step pointer are stored. Whose turn it is,
/// the winner and the draw flag are recomputed from the viewed board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

impl Game {
    /// Creates a new game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a game by playing `positions` in order from the empty board.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        positions
            .iter()
            .try_fold(Self::new(), |game, pos| game.try_play(*pos))
    }

    /// Every snapshot, oldest first. Index 0 is the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the viewed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns true when the newest snapshot is on screen.
    pub fn is_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    /// The viewed snapshot.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// Player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// First completed line on the viewed board.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.current())
    }

    /// Owner of the first completed line on the viewed board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current())
    }

    /// Returns true when the viewed board is full.
    ///
    /// This does not exclude a winner; [`Game::status`] applies precedence.
    pub fn is_draw(&self) -> bool {
        rules::is_full(self.current())
    }

    /// Winner beats draw, draw beats "next player".
    pub fn status(&self) -> GameStatus {
        let board = self.current();
        if let Some(line) = rules::winning_line(board)
            && let Some(winner) = board.get(line.positions()[0]).player()
        {
            GameStatus::Won { winner, line }
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Describes what history entry `step` changed, against the whole history.
    pub fn describe(&self, step: usize) -> StepChange {
        match self.history.get(step) {
            Some(snapshot) => rules::describe_step(step, snapshot, &self.history),
            None => StepChange::Unchanged,
        }
    }

    /// Places the next mark at `pos` on the viewed board.
    ///
    /// Entries after the viewed step are discarded first, so playing from a
    /// past board overwrites the old future. The winner check runs before
    /// the occupancy check.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn try_play(&self, pos: Position) -> Result<Self, MoveError> {
        let current = self.current();
        if rules::winning_line(current).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut next = current.clone();
        next.set(pos, Square::Occupied(player));

        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(next);

        let game = Self {
            step: history.len() - 1,
            history,
        };
        debug!(%player, position = %pos, discarded, step = game.step, "Move applied");

        #[cfg(debug_assertions)]
        assert_invariants(&game);

        Ok(game)
    }

    /// Like [`Game::try_play`], but a rejected move leaves the game unchanged.
    pub fn play(&self, pos: Position) -> Self {
        self.try_play(pos).unwrap_or_else(|err| {
            debug!(position = %pos, error = %err, "Move ignored");
            self.clone()
        })
    }

    /// Views the snapshot at `step` without touching history.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let game = Self {
            history: self.history.clone(),
            step,
        };
        debug!(to = step, next = %game.next_player(), "Jumped");

        #[cfg(debug_assertions)]
        assert_invariants(&game);

        Ok(game)
    }

    /// Like [`Game::try_jump_to`], but an out-of-range step is ignored.
    pub fn jump_to(&self, step: usize) -> Self {
        self.try_jump_to(step).unwrap_or_else(|err| {
            debug!(error = %err, "Jump ignored");
            self.clone()
        })
    }

    /// Applies a front-end action with the silent no-op contract.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::JumpTo(step) => self.jump_to(step),
        }
    }
}

#[cfg(test)]
impl Game {
    /// Builds a game without any checks, for exercising the invariants.
    pub(crate) fn from_parts(history: Vec<Board>, step: usize) -> Self {
        Self { history, step }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn assert_invariants(game: &Game) {
    use super::invariants::{GameInvariants, InvariantSet};
    use tracing::error;

    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            error!(%violation, "Game invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_views_empty_board() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.current(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_play_discards_future_entries() {
        let game = Game::replay(&[Position::TopLeft, Position::Center, Position::TopRight])
            .expect("legal moves");
        let branched = game.jump_to(1).play(Position::BottomRight);

        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step(), 2);
        assert_eq!(&branched.history()[..2], &game.history()[..2]);
        assert_eq!(
            branched.current().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
    }

    #[test]
    fn test_winner_checked_before_occupancy() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ])
        .expect("legal moves");

        // Occupied and won at once: the win is what gets reported.
        assert_eq!(game.try_play(Position::TopLeft), Err(MoveError::GameOver));
        assert_eq!(game.try_play(Position::BottomLeft), Err(MoveError::GameOver));
    }

    #[test]
    fn test_jump_keeps_history_consistent() {
        let game = Game::replay(&[Position::Center, Position::TopLeft]).expect("legal moves");
        let rewound = game.try_jump_to(1).expect("in range");
        assert_eq!(rewound.history(), game.history());
        assert_eq!(rewound.next_player(), Player::O);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invariants violated")]
    fn test_jump_checks_invariants() {
        let mut corrupt = Board::new();
        corrupt.set(Position::TopLeft, Square::Occupied(Player::X));
        corrupt.set(Position::Center, Square::Occupied(Player::O));

        let game = Game::from_parts(vec![Board::new(), corrupt], 0);
        let _ = game.try_jump_to(1);
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let game = Game::new()
            .apply(Action::Play(Position::Center))
            .apply(Action::JumpTo(0));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.step(), 0);

        let unchanged = game.apply(Action::JumpTo(9));
        assert_eq!(unchanged, game);
    }

    #[test]
    fn test_status_prefers_winner_over_draw() {
        // X X X / O O X / X O O reached legally: the ninth move completes the row.
        let game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::MiddleRight,
            Position::BottomCenter,
            Position::BottomLeft,
            Position::BottomRight,
            Position::TopRight,
        ])
        .expect("legal moves");

        assert!(game.is_draw());
        assert_eq!(game.status().winner(), Some(Player::X));
        assert_eq!(game.status().to_string(), "Winner: X");
    }
}
