//! Application state and input handling.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Frame, widgets::ListState};
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use super::ui::{self, ScreenLayout, board};
use crate::games::tictactoe::{GameController, Position};
use crate::store::{KeyValueStore, StoreError};

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFlow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game controller plus purely presentational state (cursor,
/// focus, list selection). Game state is never copied out of the
/// controller; every draw derives a fresh view.
#[derive(Debug)]
pub struct App<S> {
    game: GameController<S>,
    cursor: Position,
    focus: Focus,
    moves_state: ListState,
    layout: ScreenLayout,
}

impl<S: KeyValueStore> App<S> {
    /// Creates a new application around `game`.
    #[instrument(skip(game))]
    pub fn new(game: GameController<S>) -> Self {
        let mut moves_state = ListState::default();
        moves_state.select(Some(game.current_move()));
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            moves_state,
            layout: ScreenLayout::default(),
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController<S> {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Part of the screen that receives keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected entry in the move list.
    pub fn selected_move(&self) -> Option<usize> {
        self.moves_state.selected()
    }

    /// Layout used by the last draw.
    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// Draws the whole screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = ScreenLayout::new(frame.area());
        let view = self.game.view();
        let cursor = (self.focus == Focus::Board).then_some(self.cursor);

        ui::draw_title(frame, self.layout.title);
        ui::draw_board(frame, self.layout.board, view.board(), cursor);
        ui::draw_restart(frame, self.layout.restart);
        ui::draw_status(frame, self.layout.status, &view.status_text());
        ui::draw_moves(
            frame,
            self.layout.moves,
            view.moves(),
            &mut self.moves_state,
            self.focus == Focus::Moves,
        );
        ui::draw_help(frame, self.layout.help);
    }

    /// Handles one input event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a state change cannot be persisted.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) -> Result<AppFlow, StoreError> {
        match &event {
            Event::Key(key) if key.kind == KeyEventKind::Release => return Ok(AppFlow::Continue),
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    info!("User quit");
                    return Ok(AppFlow::Quit);
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.game.restart()?;
                    self.sync_selection();
                    return Ok(AppFlow::Continue);
                }
                KeyCode::Tab | KeyCode::BackTab => {
                    self.focus = self.focus.toggle();
                    debug!(focus = ?self.focus, "Focus changed");
                    return Ok(AppFlow::Continue);
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if board::contains(self.layout.restart, mouse.column, mouse.row) {
                    self.game.restart()?;
                    self.sync_selection();
                    return Ok(AppFlow::Continue);
                }
                let len = self.game.history().len();
                let offset = self.moves_state.offset();
                if let Some(index) =
                    ui::moves::hit_test(self.layout.moves, offset, len, mouse.column, mouse.row)
                {
                    self.focus = Focus::Moves;
                    self.moves_state.select(Some(index));
                    return self.jump(index);
                }
            }
            _ => {}
        }

        match self.focus {
            Focus::Board => self.handle_board_event(&event),
            Focus::Moves => self.handle_moves_event(&event),
        }
    }

    fn handle_board_event(&mut self, event: &Event) -> Result<AppFlow, StoreError> {
        if let Event::Key(key) = event
            && matches!(
                key.code,
                KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
            )
        {
            self.cursor = move_cursor(self.cursor, key.code);
            return Ok(AppFlow::Continue);
        }

        let game = &mut self.game;
        if let Some(result) = board::dispatch(event, self.layout.board, self.cursor, |position| {
            game.play_square(position)
        }) {
            result?;
            if let Event::Mouse(mouse) = event
                && let Some(position) =
                    board::hit_test(self.layout.board, mouse.column, mouse.row)
            {
                self.cursor = position;
            }
            self.sync_selection();
        }
        Ok(AppFlow::Continue)
    }

    fn handle_moves_event(&mut self, event: &Event) -> Result<AppFlow, StoreError> {
        let Event::Key(key) = event else {
            return Ok(AppFlow::Continue);
        };
        let last = self.game.history().last_index();
        let selected = self.moves_state.selected().unwrap_or(self.game.current_move());

        match key.code {
            KeyCode::Up => {
                self.moves_state.select(Some(selected.saturating_sub(1)));
            }
            KeyCode::Down => {
                self.moves_state.select(Some((selected + 1).min(last)));
            }
            KeyCode::Home => {
                self.moves_state.select(Some(0));
            }
            KeyCode::End => {
                self.moves_state.select(Some(last));
            }
            KeyCode::Enter | KeyCode::Char(' ') => return self.jump(selected),
            _ => {}
        }
        Ok(AppFlow::Continue)
    }

    /// Jumps unless `index` is the move already shown (its entry is disabled).
    fn jump(&mut self, index: usize) -> Result<AppFlow, StoreError> {
        if index == self.game.current_move() {
            debug!(index, "Selected entry is disabled");
            return Ok(AppFlow::Continue);
        }
        self.game.jump_to_move(index)?;
        self.sync_selection();
        Ok(AppFlow::Continue)
    }

    fn sync_selection(&mut self) {
        self.moves_state.select(Some(self.game.current_move()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Square};
    use crate::store::MemoryStore;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::widgets::{Block, Borders};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> App<MemoryStore> {
        App::new(GameController::new(MemoryStore::new()).unwrap())
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App<MemoryStore>) {
        terminal.draw(|f| app.draw(f)).unwrap();
    }

    /// Screen coordinate of move-list entry `index`, as last drawn.
    fn move_entry(app: &App<MemoryStore>, index: u16) -> (u16, u16) {
        let inner = Block::default().borders(Borders::ALL).inner(app.layout().moves);
        (inner.x + 2, inner.y + index)
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = app();
        app.handle_event(key(KeyCode::Up)).unwrap();
        app.handle_event(key(KeyCode::Enter)).unwrap();

        let view = app.game().view();
        assert_eq!(view.board().get(Position::TopCenter), Square::Occupied(Mark::X));
        assert_eq!(app.selected_move(), Some(1));
    }

    #[test]
    fn test_move_list_jumps_and_skips_current() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('1'))).unwrap();
        app.handle_event(key(KeyCode::Char('5'))).unwrap();
        assert_eq!(app.game().current_move(), 2);

        app.handle_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus(), Focus::Moves);

        // Enter on the current entry does nothing.
        app.handle_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.game().current_move(), 2);

        app.handle_event(key(KeyCode::Up)).unwrap();
        app.handle_event(key(KeyCode::Up)).unwrap();
        app.handle_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_restart_and_quit_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('3'))).unwrap();
        app.handle_event(key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.selected_move(), Some(0));

        assert_eq!(app.handle_event(key(KeyCode::Char('q'))).unwrap(), AppFlow::Quit);
    }

    #[test]
    fn test_space_plays_at_cursor() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(
            app.game().view().board().get(Position::Center),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_mouse_click_on_drawn_board() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut terminal, &mut app);

        let cell = board::cell_areas(app.layout().board)[Position::BottomLeft.to_index()];
        app.handle_event(click(cell.x + 1, cell.y + 1)).unwrap();

        assert_eq!(
            app.game().view().board().get(Position::BottomLeft),
            Square::Occupied(Mark::X)
        );
        assert_eq!(app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_mouse_click_on_restart_button() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('1'))).unwrap();
        app.handle_event(key(KeyCode::Char('5'))).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut terminal, &mut app);
        let button = app.layout().restart;
        app.handle_event(click(button.x + button.width / 2, button.y + 1))
            .unwrap();

        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.selected_move(), Some(0));
    }

    #[test]
    fn test_mouse_click_on_move_entries() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('1'))).unwrap();
        app.handle_event(key(KeyCode::Char('5'))).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        draw(&mut terminal, &mut app);
        let (column, row) = move_entry(&app, 0);
        app.handle_event(click(column, row)).unwrap();

        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.focus(), Focus::Moves);

        // The shown move's entry is disabled.
        draw(&mut terminal, &mut app);
        let history_before = app.game().history().clone();
        app.handle_event(click(column, row)).unwrap();
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.game().history(), &history_before);

        let (column, row) = move_entry(&app, 2);
        app.handle_event(click(column, row)).unwrap();
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.selected_move(), Some(2));
    }
}
