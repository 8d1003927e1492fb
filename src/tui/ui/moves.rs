//! Move list: one selector per history entry.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::board::contains;
use crate::games::tictactoe::MoveSelector;

/// Draws the move list. The entry for the shown move is dimmed.
pub fn draw_moves(
    frame: &mut Frame,
    area: Rect,
    moves: &[MoveSelector],
    state: &mut ListState,
    focused: bool,
) {
    let items: Vec<ListItem> = moves
        .iter()
        .map(|selector| {
            let style = if selector.is_disabled() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", selector.index() + 1, selector.label())).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, state);
}

/// Returns the history index of the entry under (`column`, `row`).
///
/// `area` is the bordered list area as drawn; `offset` is the list's scroll
/// offset after the last draw.
pub fn hit_test(area: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if !contains(inner, column, row) {
        return None;
    }
    let index = offset + usize::from(row - inner.y);
    (index < len).then_some(index)
}
