//! Values derived from `(history, current move)` on every render.
//!
//! Nothing in here is stored. A [`GameView`] is rebuilt from scratch each
//! time it is needed, so it can never drift from the history it describes.

use super::history::History;
use super::rules::{check_winner, is_full, next_mark};
use super::types::{Board, Mark};
use derive_getters::Getters;
use tracing::instrument;

/// Current status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Won(Mark),
    /// Board is full with no line.
    #[display("Scratch: Cat's game")]
    Draw,
    /// Game continues with `Mark` to play.
    #[display("Next player: {}", _0)]
    InProgress(Mark),
}

impl GameStatus {
    /// Derives the status of a single board.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(next_mark(board))
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// An entry in the move list that jumps to one history index.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct MoveSelector {
    /// History index this entry jumps to.
    index: usize,
    /// Text shown on the entry.
    label: String,
    /// Whether this entry is the move currently shown.
    current: bool,
}

impl MoveSelector {
    /// Builds the selector for history index `index`.
    pub fn for_index(index: usize, current_move: usize) -> Self {
        let mut label = if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        };
        let current = index == current_move;
        if current {
            label.push_str(" (current)");
        }
        Self::new(index, label, current)
    }

    /// The current entry cannot be activated.
    pub fn is_disabled(&self) -> bool {
        self.current
    }
}

/// Everything a renderer needs, derived from history and the current move.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// Board at the current move.
    board: Board,
    /// Mark that would be placed by the next move.
    next_mark: Mark,
    /// Winner of the current board, if any.
    winner: Option<Mark>,
    /// Status of the current board.
    status: GameStatus,
    /// One selector per history entry.
    moves: Vec<MoveSelector>,
}

impl GameView {
    /// Derives the view for `history` at `current_move`.
    ///
    /// `current_move` must index into `history`; the controller guarantees it.
    #[instrument(skip(history), fields(history_len = history.len()))]
    pub fn derive(history: &History, current_move: usize) -> Self {
        let board = history
            .get(current_move)
            .copied()
            .unwrap_or_else(Board::new);
        let status = GameStatus::of(&board);
        let moves = (0..history.len())
            .map(|index| MoveSelector::for_index(index, current_move))
            .collect();

        Self {
            board,
            next_mark: next_mark(&board),
            winner: status.winner(),
            status,
            moves,
        }
    }

    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Mark::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Draw.to_string(), "Scratch: Cat's game");
        assert_eq!(GameStatus::InProgress(Mark::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_selector_labels() {
        let labels: Vec<String> = (0..3)
            .map(|k| MoveSelector::for_index(k, 1).label().clone())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (current)".to_string(),
                "Go to move #2".to_string(),
            ]
        );
        assert!(MoveSelector::for_index(1, 1).is_disabled());
        assert!(!MoveSelector::for_index(0, 1).is_disabled());
    }

    #[test]
    fn test_start_selector_marked_current() {
        let view = GameView::derive(&History::new(), 0);
        assert_eq!(view.moves().len(), 1);
        assert_eq!(view.moves()[0].label(), "Go to game start (current)");
        assert_eq!(view.status_text(), "Next player: X");
    }

    #[test]
    fn test_derive_uses_current_move_board() {
        let mut history = History::new();
        let first = Board::new().with_mark(Position::TopLeft, Mark::X);
        history.branch_from(0, first);

        let past = GameView::derive(&history, 0);
        assert_eq!(past.board(), &Board::new());
        assert_eq!(*past.next_mark(), Mark::X);

        let latest = GameView::derive(&history, 1);
        assert_eq!(latest.board(), &first);
        assert_eq!(*latest.next_mark(), Mark::O);
        assert_eq!(*latest.winner(), None);
    }
}
