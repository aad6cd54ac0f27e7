use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorLeft,
    CursorRight,
    /// Drop into the column under the cursor
    DropSelected,
    /// Drop straight into a column (zero-based)
    DropColumn(usize),
    Reset,
    /// Left click at screen coordinates; resolved against the last frame
    Click { x: u16, y: u16 },
}

/// Translate a terminal event, ignoring anything without a binding
pub fn action_for(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorRight),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => Some(Action::DropSelected),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char(c @ '1'..='9') => Some(Action::DropColumn(c as usize - '1' as usize)),
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}
