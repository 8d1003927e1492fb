//! UI rendering using ratatui.

pub mod board;
pub mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, draw_board};
pub use moves::draw_moves;

/// Width of the restart button, borders included.
const RESTART_WIDTH: u16 = 13;

/// Screen areas of every part of the game screen.
///
/// Computed from the frame area on each draw and kept by the app so mouse
/// clicks can be matched against what was last drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The 3x3 grid.
    pub board: Rect,
    /// Restart button.
    pub restart: Rect,
    /// Status line.
    pub status: Rect,
    /// Move list.
    pub moves: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game screen.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Title
                Constraint::Min(BOARD_HEIGHT + 3),     // Game
                Constraint::Length(3),                 // Help
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(34)])
            .split(chunks[1]);

        let board_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)])
            .split(columns[0]);

        let info_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(columns[1]);

        Self {
            title: chunks[0],
            board: center_rect(board_column[0], BOARD_WIDTH, BOARD_HEIGHT),
            restart: center_rect(board_column[1], RESTART_WIDTH, 3),
            status: info_column[0],
            moves: info_column[1],
            help: chunks[2],
        }
    }
}

/// Draws the title bar.
pub fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Draws the restart button.
pub fn draw_restart(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new("restart")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// Draws the status line.
pub fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, area);
}

/// Draws the key help line.
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("Arrows/1-9: Play | Tab: Board/Moves | Enter: Select | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
