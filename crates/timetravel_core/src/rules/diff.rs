//! Describing what a history entry changed.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What happened between a history entry and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepChange {
    /// The initial empty board.
    Start,
    /// A mark was placed.
    Placed {
        /// Player inferred from the step's parity.
        mover: Player,
        /// Where the mark went.
        position: Position,
    },
    /// The entry matches its predecessor.
    Unchanged,
}

impl std::fmt::Display for StepChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepChange::Start => write!(f, "No move has been made yet."),
            StepChange::Placed { mover, position } => {
                let (row, col) = position.coordinates();
                write!(f, "{} made a move at ({},{})", mover, row, col)
            }
            StepChange::Unchanged => write!(f, "No move made"),
        }
    }
}

/// Compares `snapshot` (the entry at `step`) with `history[step - 1]`.
///
/// Only the first differing square is reported. The mover is derived from
/// the step number rather than read off the board.
#[instrument(skip(snapshot, history))]
pub fn describe_step(step: usize, snapshot: &Board, history: &[Board]) -> StepChange {
    if step == 0 {
        return StepChange::Start;
    }

    let Some(previous) = history.get(step - 1) else {
        return StepChange::Unchanged;
    };

    snapshot
        .changed_positions(previous)
        .next()
        .map(|position| StepChange::Placed {
            mover: Player::for_step(step),
            position,
        })
        .unwrap_or(StepChange::Unchanged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_start_has_fixed_text() {
        let history = vec![Board::new()];
        let change = describe_step(0, &history[0], &history);
        assert_eq!(change, StepChange::Start);
        assert_eq!(change.to_string(), "No move has been made yet.");
    }

    #[test]
    fn test_placed_reports_one_based_coordinates() {
        let first = Board::new();
        let mut second = first.clone();
        second.set(Position::MiddleRight, Square::Occupied(Player::X));
        let history = vec![first, second];

        let change = describe_step(1, &history[1], &history);
        assert_eq!(change.to_string(), "X made a move at (2,3)");
    }

    #[test]
    fn test_mover_comes_from_parity() {
        // The board says X but step 2 belongs to O.
        let mut first = Board::new();
        first.set(Position::TopLeft, Square::Occupied(Player::X));
        let mut second = first.clone();
        second.set(Position::BottomLeft, Square::Occupied(Player::X));
        let history = vec![Board::new(), first, second];

        let change = describe_step(2, &history[2], &history);
        assert_eq!(
            change,
            StepChange::Placed {
                mover: Player::O,
                position: Position::BottomLeft,
            }
        );
    }

    #[test]
    fn test_identical_entries_are_unchanged() {
        let history = vec![Board::new(), Board::new()];
        let change = describe_step(1, &history[1], &history);
        assert_eq!(change, StepChange::Unchanged);
        assert_eq!(change.to_string(), "No move made");
    }

    #[test]
    fn test_missing_predecessor_is_unchanged() {
        let history = vec![Board::new()];
        assert_eq!(describe_step(5, &Board::new(), &history), StepChange::Unchanged);
    }
}
