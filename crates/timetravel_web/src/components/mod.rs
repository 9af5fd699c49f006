//! Component tree: `Game` owns the state, `Board` and `Square` only draw.

mod board;
mod game;
mod square;

pub use board::Board;
pub use game::Game;
pub use square::Square;
