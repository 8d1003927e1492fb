//! Exhaustive checks of the rules over every board reachable by legal play.

use std::collections::HashSet;

use tictactoe_history::rules::{LINES, check_winner, is_full, next_mark};
use tictactoe_history::{Board, GameStatus, Mark, Position};

/// Every board reachable from the empty board, stopping at wins and draws.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if check_winner(&board).is_some() || is_full(&board) {
            continue;
        }
        let mark = next_mark(&board);
        for pos in Position::ALL {
            if board.is_empty(pos) {
                stack.push(board.with_mark(pos, mark));
            }
        }
    }
    seen
}

fn complete_line_marks(board: &Board) -> HashSet<Mark> {
    LINES
        .iter()
        .filter_map(|[a, b, c]| {
            let mark = board.get(*a).mark()?;
            (board.get(*b).mark() == Some(mark) && board.get(*c).mark() == Some(mark))
                .then_some(mark)
        })
        .collect()
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct positions reachable in tic-tac-toe.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_no_reachable_board_has_two_winners() {
    for board in reachable_boards() {
        let marks = complete_line_marks(&board);
        assert!(marks.len() <= 1, "two winners on {:?}", board);
        assert_eq!(check_winner(&board), marks.into_iter().next());
    }
}

#[test]
fn test_next_mark_matches_parity_everywhere() {
    for board in reachable_boards() {
        let expected = if board.mark_count() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        assert_eq!(next_mark(&board), expected);
    }
}

#[test]
fn test_status_covers_every_board() {
    let mut wins = 0;
    let mut draws = 0;
    for board in reachable_boards() {
        match GameStatus::of(&board) {
            GameStatus::Won(_) => wins += 1,
            GameStatus::Draw => {
                assert!(is_full(&board));
                draws += 1;
            }
            GameStatus::InProgress(mark) => {
                assert!(!is_full(&board));
                assert_eq!(mark, next_mark(&board));
            }
        }
    }
    assert_eq!(wins, 942);
    assert_eq!(draws, 16);
}
