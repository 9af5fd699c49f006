//! A single cell.

use timetravel_core::SquareView;
use yew::prelude::*;

/// Props for [`Square`].
#[derive(Properties, PartialEq)]
pub struct SquareProps {
    /// What to draw.
    pub square: SquareView,
    /// Fired on click. The square does not know its own index.
    pub on_click: Callback<()>,
}

/// A button showing `X`, `O` or nothing, marked `winner` on the winning line.
#[function_component(Square)]
pub fn square(props: &SquareProps) -> Html {
    let onclick = props.on_click.reform(|_: MouseEvent| ());

    html! {
        <button class={props.square.class()} {onclick}>
            { props.square.text() }
        </button>
    }
}
