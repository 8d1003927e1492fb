//! Turn order: whose mark goes down next.

use super::super::{Board, Mark};
use tracing::instrument;

/// Returns the mark to play next on `board`.
///
/// X moves on an even number of occupied squares, O on an odd number.
#[instrument(skip(board), fields(mark_count = board.mark_count()))]
pub fn next_mark(board: &Board) -> Mark {
    if board.mark_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Position;
    use super::*;

    #[test]
    fn test_parity_alternates() {
        let mut board = Board::new();
        for (k, pos) in Position::ALL.iter().enumerate() {
            let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(next_mark(&board), expected, "after {} marks", k);
            board = board.with_mark(*pos, expected);
        }
    }

    #[test]
    fn test_parity_ignores_which_mark_was_placed() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::O)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(next_mark(&board), Mark::X);
    }
}
