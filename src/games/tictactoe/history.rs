//! Move history: the sequence of board snapshots a game has produced.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered sequence of board snapshots.
///
/// Index 0 is always a board; a fresh history holds just the empty board.
/// Entries are only ever appended or truncated away, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    boards: Vec<Board>,
}

/// Returned when building a [`History`] from an empty list of boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("History must contain at least one board")]
pub struct EmptyHistory;

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots (moves made plus the starting board).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Index of the latest snapshot.
    pub fn last_index(&self) -> usize {
        self.boards.len() - 1
    }

    /// Snapshot at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// All snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Drops every snapshot after `index`, then appends `board`.
    ///
    /// With `index` at the latest snapshot this is a plain append.
    #[instrument(skip(self, board), fields(history_len = self.boards.len()))]
    pub fn branch_from(&mut self, index: usize, board: Board) {
        if index < self.last_index() {
            debug!(
                discarded = self.last_index() - index,
                "Discarding future moves"
            );
            self.boards.truncate(index + 1);
        }
        self.boards.push(board);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = EmptyHistory;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        if boards.is_empty() {
            Err(EmptyHistory)
        } else {
            Ok(Self { boards })
        }
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}
