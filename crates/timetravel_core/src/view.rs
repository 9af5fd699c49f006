//! Render projection: everything a front end draws, derived from a [`Game`].
//!
//! Front ends never inspect the game directly. They build a [`GameView`]
//! after every transition and draw it, so what appears on screen is a pure
//! function of the history and the step pointer.

use crate::rules::{Line, StepChange};
use crate::{Board, Game, GameStatus, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Class every square carries.
pub const SQUARE_CLASS: &str = "square";

/// Marker added to squares on the winning line.
pub const WINNER_CLASS: &str = "winner";

/// One cell as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SquareView {
    position: Position,
    value: Square,
    winner: bool,
}

impl SquareView {
    /// Creates the view of a single cell.
    pub fn new(position: Position, value: Square, winner: bool) -> Self {
        Self {
            position,
            value,
            winner,
        }
    }

    /// Where the cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// What the cell holds.
    pub fn value(&self) -> Square {
        self.value
    }

    /// Whether the cell belongs to the winning line.
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// `"X"`, `"O"` or the empty string.
    pub fn text(&self) -> &'static str {
        match self.value.player() {
            Some(crate::Player::X) => "X",
            Some(crate::Player::O) => "O",
            None => "",
        }
    }

    /// Class attribute: `"square"`, or `"square winner"` on the winning line.
    pub fn class(&self) -> String {
        if self.winner {
            format!("{SQUARE_CLASS} {WINNER_CLASS}")
        } else {
            SQUARE_CLASS.to_string()
        }
    }
}

/// Nine cells in board order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BoardView {
    squares: [SquareView; 9],
}

impl BoardView {
    /// Flags each cell that is a member of `line`. No line, no flags.
    pub fn new(board: &Board, line: Option<&Line>) -> Self {
        let squares = Position::ALL.map(|pos| {
            let winner = line.is_some_and(|line| line.contains(pos));
            SquareView::new(pos, board.get(pos), winner)
        });
        Self { squares }
    }

    /// All cells in board order.
    pub fn squares(&self) -> &[SquareView; 9] {
        &self.squares
    }

    /// The cell at `pos`.
    pub fn get(&self, pos: Position) -> &SquareView {
        &self.squares[pos.to_index()]
    }

    /// Cells grouped into the three rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(3)
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Text of the jump button.
    label: String,
    /// What this entry changed.
    change: StepChange,
    /// Snapshot at this step, never highlighted.
    board: BoardView,
    /// Whether this entry is on screen.
    current: bool,
}

impl MoveEntry {
    /// Jump button text for `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything one render needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Status after precedence: winner, draw, next player.
    status: GameStatus,
    /// The viewed board with the winning line flagged.
    board: BoardView,
    /// One entry per history item, oldest first.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

impl From<&Game> for GameView {
    #[instrument(skip(game), fields(step = game.step(), len = game.history().len()))]
    fn from(game: &Game) -> Self {
        let status = game.status();
        let board = BoardView::new(game.current(), status.line().as_ref());

        // Descriptions use each entry's own index against the full history,
        // not the viewed step.
        let moves = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                label: MoveEntry::label_for(step),
                change: game.describe(step),
                board: BoardView::new(snapshot, None),
                current: step == game.step(),
            })
            .collect();

        Self {
            status,
            board,
            moves,
        }
    }
}
