//! Tic-tac-toe with time travel.
//!
//! The game is an immutable value holding every board snapshot and the
//! index of the one on screen. Moves append a snapshot (discarding any
//! snapshots after the viewed one), jumps only move the index.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure evaluators for winning lines, full boards and
//!   per-step change descriptions ([`rules`])
//! - **Game**: [`Game`] with `play` / `jump_to` transitions and the derived
//!   [`GameStatus`]
//! - **Invariants**: history properties checked after every transition in
//!   debug builds ([`invariants`])
//! - **View**: [`GameView`], the render projection both front ends draw
//!
//! # Example
//!
//! ```
//! use timetravel_core::{Game, GameView, Position};
//!
//! let game = Game::new()
//!     .play(Position::TopLeft)
//!     .play(Position::Center)
//!     .play(Position::TopLeft); // occupied: ignored
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! let view = GameView::from(&game.jump_to(0));
//! assert_eq!(view.status_text(), "Next player: X");
//! assert_eq!(view.moves()[2].change().to_string(), "O made a move at (2,2)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
pub mod view;

pub use action::{Action, MoveError};
pub use game::{Game, GameStatus};
pub use position::{Direction, Position};
pub use rules::{Line, StepChange};
pub use types::{Board, Player, Square};
pub use view::{BoardView, GameView, MoveEntry, SquareView};
