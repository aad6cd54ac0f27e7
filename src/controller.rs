//! Input handling between a presentation surface and the game session.
//!
//! [`Controller`] turns a column selection into a placement, drives the
//! session through its win/tie transitions and pushes the result to a
//! [`Render`] implementation. Refused moves are dropped without telling the
//! player.

use crate::game::{GameSession, GameStatus, Grid, Placement};

/// A surface that can show the grid and the game status.
pub trait Render {
    type Error;

    fn render(&mut self, grid: &Grid, status: &GameStatus) -> Result<(), Self::Error>;
}

pub struct Controller<R> {
    session: GameSession,
    renderer: R,
}

impl<R: Render> Controller<R> {
    /// Start an empty session and show it
    pub fn new(width: usize, height: usize, renderer: R) -> Result<Self, R::Error> {
        let mut controller = Controller {
            session: GameSession::new(width, height),
            renderer,
        };
        controller.redraw()?;
        Ok(controller)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// Returns `Ok(None)` when the move is ignored (game over, full or
    /// unknown column); nothing is rendered in that case.
    pub fn select_column(&mut self, column: usize) -> Result<Option<Placement>, R::Error> {
        match self.session.play(column) {
            Ok(placement) => {
                self.redraw()?;
                Ok(Some(placement))
            }
            Err(err) => {
                tracing::debug!(column, reason = %err, "move ignored");
                Ok(None)
            }
        }
    }

    /// Throw the current session away and start a fresh one of the same size
    pub fn reset(&mut self) -> Result<(), R::Error> {
        let (width, height) = (self.session.grid().width(), self.session.grid().height());
        self.session = GameSession::new(width, height);
        tracing::info!("new game started");
        self.redraw()
    }

    /// Render the current state again without changing it
    pub fn redraw(&mut self) -> Result<(), R::Error> {
        self.renderer
            .render(self.session.grid(), self.session.status())
    }
}
