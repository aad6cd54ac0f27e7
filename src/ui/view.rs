use crate::controller::Render;
use crate::game::{GameStatus, Grid};
use ratatui::{backend::Backend, layout::Rect, Terminal};

use super::game_view::{self, ViewLayout};

/// The terminal as a [`Render`] surface. Besides the terminal it only holds
/// the column cursor and the geometry of the last frame; the grid and status
/// always come from the session.
pub struct TerminalView<B: Backend> {
    terminal: Terminal<B>,
    selected_column: usize,
    layout: Option<ViewLayout>,
}

impl<B: Backend> TerminalView<B> {
    pub fn new(terminal: Terminal<B>, columns: usize) -> Self {
        TerminalView {
            terminal,
            // Start in middle
            selected_column: columns / 2,
            layout: None,
        }
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn move_left(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    pub fn move_right(&mut self, columns: usize) {
        if self.selected_column + 1 < columns {
            self.selected_column += 1;
        }
    }

    /// Point the cursor at `column`, clamped to the grid
    pub fn select(&mut self, column: usize, columns: usize) {
        self.selected_column = column.min(columns.saturating_sub(1));
    }

    /// Geometry of the most recent frame, `None` before the first draw
    pub fn layout(&self) -> Option<&ViewLayout> {
        self.layout.as_ref()
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Render for TerminalView<B> {
    type Error = B::Error;

    fn render(&mut self, grid: &Grid, status: &GameStatus) -> Result<(), B::Error> {
        let selected = self.selected_column;
        let mut area = Rect::default();
        self.terminal.draw(|frame| {
            area = frame.area();
            game_view::render(frame, grid, status, selected);
        })?;
        self.layout = Some(ViewLayout::new(area, grid.width(), grid.height()));
        Ok(())
    }
}
