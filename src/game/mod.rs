//! Core Connect Four game logic: the occupancy grid, player identifiers, the
//! four-in-a-row scan and the per-game session state machine.

mod board;
pub mod detector;
mod player;
mod state;

pub use board::{Cell, Grid, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use detector::{find_win, Direction, WinLine};
pub use player::Player;
pub use state::{GameSession, GameStatus, Placement};

pub use crate::error::MoveError;
