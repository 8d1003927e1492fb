//! Tic-tac-toe with move history.

mod controller;
mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use controller::{CURRENT_MOVE_KEY, GameController, SQUARES_KEY};
pub use history::{EmptyHistory, History};
pub use position::Position;
pub use types::{Board, Mark, Square};
pub use view::{GameStatus, GameView, MoveSelector};
