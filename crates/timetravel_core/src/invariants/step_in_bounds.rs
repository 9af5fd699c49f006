//! Step pointer invariant: history starts empty and the step points into it.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: history is non-empty, begins with the empty board, and the
/// step pointer indexes an existing entry.
pub struct StepInBoundsInvariant;

impl Invariant<Game> for StepInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        history.first() == Some(&Board::new()) && game.step() < history.len()
    }

    fn description() -> &'static str {
        "History starts with the empty board and the step points into it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_jump_keeps_step_in_bounds() {
        let game = Game::new().play(Position::Center).play(Position::TopLeft);
        assert!(StepInBoundsInvariant::holds(&game.jump_to(0)));
        assert!(StepInBoundsInvariant::holds(&game.jump_to(5)));
    }

    #[test]
    fn test_step_past_end_violates() {
        let game = Game::from_parts(vec![Board::new()], 1);
        assert!(!StepInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_first_entry_violates() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let game = Game::from_parts(vec![board], 0);
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
