//! Board renderer: draws the 3x3 grid and routes clicks to a handler.
//!
//! The renderer holds no state of its own. It is handed a board and an
//! optional cursor, and turns input events into the slot that was
//! activated. It never checks whether a move is legal.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{debug, instrument};

use crate::games::tictactoe::{Board, Mark, Position, Square};

/// Width of one cell in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the whole grid including separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid including separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen areas of the nine cells inside `area`, in row-major order.
///
/// `area` is expected to be [`BOARD_WIDTH`] x [`BOARD_HEIGHT`]; smaller areas
/// squash the cells.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = row_columns(rows[row * 2]);
        for col in 0..3 {
            cells[row * 3 + col] = cols[col * 2];
        }
    }
    cells
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

/// Returns the slot under terminal coordinate (`column`, `row`).
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(area)
        .iter()
        .position(|cell| contains(*cell, column, row))
        .and_then(Position::from_index)
}

pub(crate) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Routes an input event to `on_click` if it activates a cell.
///
/// A left mouse press inside a cell, a digit key `1`-`9`, or Enter/Space on
/// the cursor all count as activation. Returns `None` when the event does
/// not touch the board.
#[instrument(skip(event, on_click))]
pub fn dispatch<T>(
    event: &Event,
    area: Rect,
    cursor: Position,
    on_click: impl FnOnce(Position) -> T,
) -> Option<T> {
    let target = match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            hit_test(area, mouse.column, mouse.row)
        }
        Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(cursor),
            KeyCode::Char(c) => Position::from_digit_key(c),
            _ => None,
        },
        _ => None,
    };

    target.map(|position| {
        debug!(%position, "Cell activated");
        on_click(position)
    })
}

/// Draws `board` into `area`, highlighting `cursor` if given.
pub fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);

    let cells = cell_areas(area);
    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], board.get(pos), cursor == Some(pos));
    }

    for row in [0, 2, 4] {
        let cols = row_columns(rows[row]);
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, highlighted: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let (style, background) = if highlighted {
        (
            base_style.bg(Color::White),
            Style::default().bg(Color::White),
        )
    } else {
        (base_style, Style::default())
    };

    let lines = (0..CELL_HEIGHT)
        .map(|line| {
            if line == CELL_HEIGHT / 2 {
                Line::from(Span::styled(symbol, style))
            } else {
                Line::from("")
            }
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(lines)
        .style(background)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let line = format!("{segment}┼{segment}┼{segment}");
    let sep = Paragraph::new(line).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = (0..area.height).map(|_| Line::from("│")).collect::<Vec<_>>();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
