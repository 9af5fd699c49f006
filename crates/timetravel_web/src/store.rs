//! Reducer state owned by the `Game` component.

use std::rc::Rc;
use timetravel_core::{Action, Game};
use tracing::debug;
use yew::Reducible;

/// The only mutable state in the tree.
#[derive(Debug, Default, PartialEq)]
pub struct GameStore {
    game: Game,
}

impl GameStore {
    /// The game value currently rendered.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

impl Reducible for GameStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let game = self.game.apply(action);
        if game == self.game {
            debug!(%action, "No change");
            return self;
        }
        debug!(%action, step = game.step(), "Game updated");
        Rc::new(Self { game })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_core::Position;

    #[test]
    fn test_reduce_applies_moves_and_jumps() {
        let store = Rc::new(GameStore::default());
        let store = store.reduce(Action::Play(Position::Center));
        let store = store.reduce(Action::Play(Position::TopLeft));
        assert_eq!(store.game().history().len(), 3);

        let store = store.reduce(Action::JumpTo(1));
        assert_eq!(store.game().step(), 1);
        assert_eq!(store.game().history().len(), 3);
    }

    #[test]
    fn test_rejected_action_keeps_same_state() {
        let store = Rc::new(GameStore::default()).reduce(Action::Play(Position::Center));
        let again = Rc::clone(&store).reduce(Action::Play(Position::Center));
        assert!(Rc::ptr_eq(&store, &again));

        let out_of_range = Rc::clone(&store).reduce(Action::JumpTo(10));
        assert!(Rc::ptr_eq(&store, &out_of_range));
    }
}
