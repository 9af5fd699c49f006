//! The 3x3 grid.

use super::Square;
use timetravel_core::{Board as Snapshot, BoardView, Line, Position};
use yew::prelude::*;

/// Props for [`Board`].
#[derive(Properties, PartialEq)]
pub struct BoardProps {
    /// Snapshot to draw.
    pub squares: Snapshot,
    /// Only the live board gets one.
    #[prop_or_default]
    pub winning_line: Option<Line>,
    /// Fired with the clicked cell.
    pub on_click: Callback<Position>,
}

/// Three rows of squares. Stateless.
#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let view = BoardView::new(&props.squares, props.winning_line.as_ref());

    html! {
        <div>
            { for view.rows().map(|row| html! {
                <div class="board-row">
                    { for row.iter().map(|square| {
                        let on_click = cell_click(&props.on_click, square.position());
                        html! { <Square square={*square} {on_click} /> }
                    }) }
                </div>
            }) }
        </div>
    }
}

/// Tags a square's index-free click with the cell it belongs to.
fn cell_click(on_click: &Callback<Position>, pos: Position) -> Callback<()> {
    on_click.reform(move |()| pos)
}
