//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Nothing here
//! knows about history or persistence.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::next_mark;
pub use win::{LINES, check_winner};
