//! Game controller: owns history and the current move, persists both.
//!
//! The controller keeps exactly two pieces of state, the board history and
//! the index of the move being shown. Everything else (board, next mark,
//! winner, status, move list) is derived on demand through [`GameView`].
//! Both pieces of state are read from the store once, at construction, and
//! written back after every change.

use tracing::{debug, info, instrument, warn};

use super::history::History;
use super::position::Position;
use super::view::GameView;
use crate::store::{KeyValueStore, StoreError};

/// Store key holding the board history.
pub const SQUARES_KEY: &str = "squares";

/// Store key holding the current move index.
pub const CURRENT_MOVE_KEY: &str = "currentMove";

/// Tic-tac-toe game with time travel over an injected store.
#[derive(Debug)]
pub struct GameController<S> {
    store: S,
    history: History,
    current_move: usize,
}

impl<S: KeyValueStore> GameController<S> {
    /// Loads game state from `store`, falling back to a fresh game.
    ///
    /// A stored current move beyond the stored history is clamped to the
    /// latest move.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Result<Self, StoreError> {
        let history: History = store.get(SQUARES_KEY, History::new())?;
        let mut current_move: usize = store.get(CURRENT_MOVE_KEY, 0)?;

        if current_move > history.last_index() {
            warn!(
                current_move,
                history_len = history.len(),
                "Stored current move outside history, clamping to latest"
            );
            current_move = history.last_index();
        }

        info!(
            history_len = history.len(),
            current_move, "Game controller initialized"
        );
        Ok(Self {
            store,
            history,
            current_move,
        })
    }

    /// Full board history, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the move currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the controller, returning the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Derives everything a renderer needs from the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.history, self.current_move)
    }

    /// Places the next mark at `position`.
    ///
    /// Does nothing if the shown board already has a winner or the square is
    /// taken. When an earlier move is being shown, every later move is
    /// discarded before the new board is appended.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the new state cannot be persisted.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_square(&mut self, position: Position) -> Result<(), StoreError> {
        let view = self.view();

        if let Some(winner) = view.winner() {
            debug!(%winner, "Game already won, ignoring move");
            return Ok(());
        }
        if !view.board().is_empty(position) {
            debug!(%position, "Square occupied, ignoring move");
            return Ok(());
        }

        let board = view.board().with_mark(position, *view.next_mark());
        let mut history = self.history.clone();
        history.branch_from(self.current_move, board);
        let current_move = self.current_move + 1;
        self.commit(history, current_move)?;

        info!(
            %position,
            mark = %view.next_mark(),
            current_move,
            "Mark placed"
        );
        Ok(())
    }

    /// Shows the board after move `index`.
    ///
    /// Jumping to the move already shown, or past the end of history, does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the new state cannot be persisted.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to_move(&mut self, index: usize) -> Result<(), StoreError> {
        if index == self.current_move {
            debug!("Already showing this move");
            return Ok(());
        }
        if index > self.history.last_index() {
            debug!(history_len = self.history.len(), "Move index out of range");
            return Ok(());
        }

        self.commit(self.history.clone(), index)?;
        info!(current_move = index, "Jumped to move");
        Ok(())
    }

    /// Discards the whole history and starts a new game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the new state cannot be persisted.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), StoreError> {
        self.commit(History::new(), 0)?;
        info!("Game restarted");
        Ok(())
    }

    /// Writes the new state to the store, then adopts it.
    ///
    /// On failure the in-memory state is left untouched. If only the history
    /// was written, the previous history is written back so the two keys
    /// stay in step.
    fn commit(&mut self, history: History, current_move: usize) -> Result<(), StoreError> {
        self.store.set(SQUARES_KEY, &history)?;
        if let Err(e) = self.store.set(CURRENT_MOVE_KEY, &current_move) {
            warn!(error = %e, "Failed to save current move, restoring previous history");
            if let Err(restore) = self.store.set(SQUARES_KEY, &self.history) {
                warn!(error = %restore, "Failed to restore previous history");
            }
            return Err(e);
        }

        debug!(
            squares = ?history.boards(),
            current_move,
            "State persisted"
        );
        self.history = history;
        self.current_move = current_move;
        Ok(())
    }
}
