//! Alternating marks invariant: X, O, X, O, ... down the history.

use super::Invariant;
use crate::{Game, Player, Square};

/// Invariant: every square filled by entry `n` holds X when `n` is odd and
/// O when `n` is even.
///
/// Together with the single-cell delta this is what lets the player to
/// move be derived from the step number alone.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        history.windows(2).enumerate().all(|(index, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let expected = Square::Occupied(Player::for_step(index + 1));
            after
                .changed_positions(before)
                .all(|pos| after.get(pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[Position::Center, Position::TopLeft, Position::BottomRight])
            .expect("legal moves");
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let mut first = Board::new();
        first.set(Position::Center, Square::Occupied(Player::O));
        let game = Game::from_parts(vec![Board::new(), first], 1);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut first = Board::new();
        first.set(Position::Center, Square::Occupied(Player::X));
        let mut second = first.clone();
        second.set(Position::TopLeft, Square::Occupied(Player::X));
        let game = Game::from_parts(vec![Board::new(), first, second], 2);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
