//! Browser front end for time-travel tic-tac-toe.
//!
//! Build with `trunk serve` from this crate's directory. The component tree
//! mounts into `#root` of `index.html`; `?log=debug` raises the log level.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod components;
mod logging;
mod store;

use components::Game;
use tracing::{info, warn};
use web_sys::Element;

/// Id of the element the component tree renders into.
const MOUNT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&logging::level_from_url());

    match mount_point() {
        Some(root) => {
            info!(id = MOUNT_ID, "Mounting game");
            yew::Renderer::<Game>::with_root(root).render();
        }
        None => {
            warn!(id = MOUNT_ID, "Mount point missing, rendering into body");
            yew::Renderer::<Game>::new().render();
        }
    }
}

fn mount_point() -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(MOUNT_ID)
}
