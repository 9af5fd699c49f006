//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. They never look at the step
//! pointer or the player to move, so the game and the render projection
//! can compose them in whatever order the status precedence needs.

pub mod diff;
pub mod draw;
pub mod win;

pub use diff::{StepChange, describe_step};
pub use draw::is_full;
pub use win::{LINES, Line, check_winner, winning_line};
