//! Terminal key events → dropdown keys.

use dropdown_core::Key;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a crossterm key into the names the navigator understands.
/// Chords with Ctrl or Alt never reach type-ahead.
pub fn to_key(event: &KeyEvent) -> Key {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Key::Other;
    }
    match event.code {
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
