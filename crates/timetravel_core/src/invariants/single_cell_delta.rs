//! Single-cell delta invariant: each entry adds exactly one mark.

use super::Invariant;
use crate::Game;

/// Invariant: entry `n` differs from entry `n - 1` in exactly one square,
/// and that square was empty in `n - 1`.
///
/// Marks are never removed or overwritten, only added one at a time.
pub struct SingleCellDeltaInvariant;

impl Invariant<Game> for SingleCellDeltaInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            let mut changed = after.changed_positions(before);
            match (changed.next(), changed.next()) {
                (Some(pos), None) => before.is_empty(pos) && !after.is_empty(pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}
