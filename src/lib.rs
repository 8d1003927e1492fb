//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Games**: board, rules, move history and the [`GameController`] that
//!   plays squares, jumps between moves and restarts
//! - **Store**: the [`KeyValueStore`] the controller persists its state to
//! - **TUI**: a ratatui front end that renders the board and move list
//! - **Config**: TOML settings for the binary
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameController, MemoryStore, Position};
//!
//! # fn example() -> Result<(), tictactoe_history::StoreError> {
//! let mut game = GameController::new(MemoryStore::new())?;
//! game.play_square(Position::Center)?;
//! assert_eq!(game.view().status_text(), "Next player: O");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod store;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CURRENT_MOVE_KEY, EmptyHistory, GameController, GameStatus, GameView, History, Mark,
    MoveSelector, Position, SQUARES_KEY, Square, rules,
};

// Crate-level exports - Persistence
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
