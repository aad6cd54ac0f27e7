//! Terminal UI: draws the session with Ratatui and turns key presses and
//! mouse clicks into column selections.

mod app;
pub mod game_view;
pub mod input;
mod view;

pub use app::App;
pub use view::TerminalView;
