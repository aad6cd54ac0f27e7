//! # Connect Four
//!
//! Two-player Connect Four in the terminal. Players take turns dropping
//! pieces into columns; the first to line up four horizontally, vertically or
//! diagonally wins, and a full grid without a line is a tie.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, players, win detection, session state
//! - [`controller`]: Column selection pipeline and the `Render` seam
//! - [`ui`]: Terminal UI: board view, input mapping, event loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
