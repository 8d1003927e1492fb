//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "tictactoe_history.toml")]
    pub config: PathBuf,

    /// JSON file holding the saved game (overrides the config file)
    #[arg(long, global = true, conflicts_with = "memory")]
    pub store: Option<PathBuf>,

    /// Log file used while the terminal UI runs (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Keep the game in memory only; nothing is saved
    #[arg(long, global = true)]
    pub memory: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the saved board, status and move list
    Status,

    /// Reset the saved game to an empty board
    Restart,
}
