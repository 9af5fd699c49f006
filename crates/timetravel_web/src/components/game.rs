//! The state owner: live board, status line and move list.

use super::Board;
use crate::store::GameStore;
use timetravel_core::{Action, GameView, Position};
use yew::prelude::*;

/// Root component. Everything below it is derived from [`GameView`].
#[function_component(Game)]
pub fn game() -> Html {
    let store = use_reducer(GameStore::default);
    let game = store.game();
    let view = GameView::from(game);

    let on_play = {
        let store = store.clone();
        Callback::from(move |pos: Position| store.dispatch(Action::Play(pos)))
    };

    let moves = view.moves().iter().map(|entry| {
        let step = *entry.step();
        let onclick = {
            let store = store.clone();
            Callback::from(move |_: MouseEvent| store.dispatch(Action::JumpTo(step)))
        };
        let class = classes!(entry.current().then_some("current"));

        html! {
            <li key={step.to_string()} {class}>
                <button {onclick}>{ entry.label().clone() }</button>
                <p>{ entry.change().to_string() }</p>
                <Board
                    squares={game.history()[step].clone()}
                    on_click={on_play.clone()}
                />
            </li>
        }
    });

    html! {
        <div class="game">
            <div class="game-board">
                <Board
                    squares={game.current().clone()}
                    winning_line={view.status().line()}
                    on_click={on_play.clone()}
                />
            </div>
            <div class="game-info">
                <div>{ view.status_text() }</div>
                <ol>{ for moves }</ol>
            </div>
        </div>
    }
}
