//! tictactoe_history - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{
    AppConfig, GameController, GameView, JsonFileStore, KeyValueStore, MemoryStore, tui,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(store) = cli.store.clone() {
        config = config.with_store_path(store);
    }
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    let command = cli.command.unwrap_or(Command::Play);
    initialize_tracing(&config, command)?;

    if cli.memory {
        info!("Using in-memory store");
        run(command, &config, MemoryStore::new())
    } else {
        let store = JsonFileStore::open(config.store_path()).with_context(|| {
            format!("Failed to open store at {}", config.store_path().display())
        })?;
        run(command, &config, store)
    }
}

#[instrument(skip(config, store))]
fn run<S: KeyValueStore>(command: Command, config: &AppConfig, store: S) -> Result<()> {
    let mut game = GameController::new(store).context("Failed to load saved game")?;

    match command {
        Command::Play => tui::run_tui(config, game),
        Command::Status => {
            print!("{}", render_text(&game.view()));
            Ok(())
        }
        Command::Restart => {
            game.restart().context("Failed to save restarted game")?;
            println!("Game restarted.");
            Ok(())
        }
    }
}

/// Plain-text rendering for `status`.
fn render_text(view: &GameView) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}\n", view.board().display());
    let _ = writeln!(out, "{}", view.status_text());
    for selector in view.moves() {
        let _ = writeln!(out, "{}. {}", selector.index() + 1, selector.label());
    }
    out
}

/// `play` logs to the configured file so the terminal stays clean; every
/// other command logs to stderr.
fn initialize_tracing(config: &AppConfig, command: Command) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let registry = tracing_subscriber::registry().with(filter);

    if command == Command::Play {
        let log_file = std::fs::File::create(config.log_file()).with_context(|| {
            format!("Failed to create log file {}", config.log_file().display())
        })?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    info!(?command, "Tracing initialized");
    Ok(())
}
