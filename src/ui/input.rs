//! Input adapters: keyboard and mouse events become navigation requests.

use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What an adapter asks the deck to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Navigate(NavRequest),
    Quit,
}

/// Right/Down go forward, Left/Up go back, Space optionally goes forward.
pub fn map_key(key: KeyEvent, space_advances: bool) -> Option<KeyCommand> {
    if is_ctrl_char(key, 'c') {
        return Some(KeyCommand::Quit);
    }
    match key.code {
        KeyCode::Right | KeyCode::Down => Some(KeyCommand::Navigate(NavRequest::Next)),
        KeyCode::Left | KeyCode::Up => Some(KeyCommand::Navigate(NavRequest::Previous)),
        KeyCode::Char(' ') if space_advances => Some(KeyCommand::Navigate(NavRequest::Next)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Arrow keys are consumed here and never reach anything else.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    match map_key(key, app.space_advances()) {
        Some(KeyCommand::Navigate(request)) => {
            app.navigate(request);
        }
        Some(KeyCommand::Quit) => app.request_quit(),
        None => {}
    }
}

/// Left-button drags act as swipes; a press and release on the same control
/// is a click.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.press(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.release(mouse.column, mouse.row),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
