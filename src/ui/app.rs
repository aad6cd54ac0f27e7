use crate::config::AppConfig;
use crate::controller::Controller;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::input::{action_for, Action};
use super::view::TerminalView;

pub struct App<B: Backend> {
    controller: Controller<TerminalView<B>>,
    poll_interval: Duration,
    should_quit: bool,
}

impl<B: Backend> App<B> {
    /// Start a new game on `terminal` sized by `config.board`
    pub fn new(terminal: Terminal<B>, config: &AppConfig) -> Result<Self, B::Error> {
        let view = TerminalView::new(terminal, config.board.width);
        let controller = Controller::new(config.board.width, config.board.height, view)?;
        Ok(App {
            controller,
            poll_interval: config.ui.poll_interval(),
            should_quit: false,
        })
    }

    pub fn controller(&self) -> &Controller<TerminalView<B>> {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one user action
    pub fn handle_action(&mut self, action: Action) -> Result<(), B::Error> {
        let columns = self.controller.session().grid().width();

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::CursorLeft => {
                self.controller.renderer_mut().move_left();
                self.controller.redraw()?;
            }
            Action::CursorRight => {
                self.controller.renderer_mut().move_right(columns);
                self.controller.redraw()?;
            }
            Action::DropSelected => {
                let column = self.controller.renderer().selected_column();
                self.controller.select_column(column)?;
            }
            Action::DropColumn(column) => self.drop_at(column, columns)?,
            Action::Reset => {
                self.controller.reset()?;
            }
            Action::Click { x, y } => {
                let Some(layout) = self.controller.renderer().layout().copied() else {
                    return Ok(());
                };
                if layout.is_reset(x, y) {
                    self.controller.reset()?;
                } else if let Some(column) = layout.column_at(x, y) {
                    self.drop_at(column, columns)?;
                }
            }
        }
        Ok(())
    }

    /// Move the cursor to `column` and drop there
    fn drop_at(&mut self, column: usize, columns: usize) -> Result<(), B::Error> {
        if column >= columns {
            return Ok(());
        }
        self.controller.renderer_mut().select(column, columns);
        if self.controller.select_column(column)?.is_none() {
            // ignored move, the cursor still moved
            self.controller.redraw()?;
        }
        Ok(())
    }
}

impl<B: Backend> App<B>
where
    B::Error: Into<io::Error>,
{
    /// Main application loop
    pub fn run(&mut self) -> io::Result<()> {
        while !self.should_quit {
            self.handle_events()?;
        }
        Ok(())
    }

    /// Wait for the next event; redraw on timeout so resizes are picked up
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Some(action) = action_for(&event::read()?) {
                self.handle_action(action).map_err(Into::<io::Error>::into)?;
            }
        } else {
            self.controller.redraw().map_err(Into::<io::Error>::into)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player, Position};
    use ratatui::backend::TestBackend;

    fn app() -> App<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        App::new(terminal, &AppConfig::default()).unwrap()
    }

    fn click_column(app: &mut App<TestBackend>, column: u16) {
        let layout = *app.controller().renderer().layout().unwrap();
        let x = layout.board.x + 3 + column * 3 + 1;
        app.handle_action(Action::Click { x, y: layout.board.y }).unwrap();
    }

    #[test]
    fn test_drop_selected_uses_cursor() {
        let mut app = app();
        app.handle_action(Action::CursorRight).unwrap();
        app.handle_action(Action::DropSelected).unwrap();

        let grid = app.controller().session().grid();
        assert_eq!(grid.get(Position::new(5, 4)).owner(), Some(Player::One));
    }

    #[test]
    fn test_digit_drops_in_column() {
        let mut app = app();
        app.handle_action(Action::DropColumn(0)).unwrap();
        app.handle_action(Action::DropColumn(0)).unwrap();

        let session = app.controller().session();
        assert_eq!(session.grid().get(Position::new(4, 0)).owner(), Some(Player::Two));
        assert_eq!(app.controller().renderer().selected_column(), 0);
    }

    #[test]
    fn test_digit_past_last_column_ignored() {
        let mut app = app();
        app.handle_action(Action::DropColumn(8)).unwrap();
        assert!(app.controller().session().moves().is_empty());
        assert_eq!(app.controller().renderer().selected_column(), 3);
    }

    #[test]
    fn test_click_on_column_top_drops() {
        let mut app = app();
        click_column(&mut app, 2);

        let grid = app.controller().session().grid();
        assert_eq!(grid.get(Position::new(5, 2)).owner(), Some(Player::One));
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = app();
        app.handle_action(Action::Click { x: 0, y: 0 }).unwrap();
        assert!(app.controller().session().moves().is_empty());
    }

    #[test]
    fn test_vertical_win_by_clicks_then_reset_toggle() {
        let mut app = app();
        for column in [3, 0, 3, 1, 3, 0, 3] {
            click_column(&mut app, column);
        }
        assert_eq!(
            app.controller().session().status().winner(),
            Some(Player::One)
        );

        // frozen after the win
        click_column(&mut app, 5);
        assert_eq!(app.controller().session().moves().len(), 7);

        let reset = app.controller().renderer().layout().unwrap().reset;
        app.handle_action(Action::Click {
            x: reset.x + 2,
            y: reset.y + 1,
        })
        .unwrap();
        assert_eq!(
            *app.controller().session().status(),
            GameStatus::InProgress(Player::One)
        );
        assert_eq!(app.controller().session().grid().piece_count(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_action(Action::Quit).unwrap();
        assert!(app.should_quit());
    }
}
