//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key event to a game key.
///
/// Letters are upper-cased so `w` and `W` judge the same.
pub fn map_key_event(key: KeyEvent) -> Key {
    if should_quit(key) {
        return Key::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => Key::Start,
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Key::Char(c.to_ascii_uppercase())
        }
        _ => Key::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
