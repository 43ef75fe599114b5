//! Key mapping from terminal events to host keys.
//!
//! Letters are case-sensitive: lowercase `w a s d` steer, uppercase `T S A`
//! select modes and uppercase `P` toggles the debug overlay.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a keyboard event to a host key. Unrecognized keys map to `None`.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    // Raw mode swallows SIGINT, so Ctrl-C has to quit explicitly.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Key::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char('w') => Some(Key::W),
        KeyCode::Char('a') => Some(Key::A),
        KeyCode::Char('s') => Some(Key::S),
        KeyCode::Char('d') => Some(Key::D),

        // Modes
        KeyCode::Char('T') => Some(Key::SelectTestBed),
        KeyCode::Char('S') => Some(Key::SelectSnake),
        KeyCode::Char('A') => Some(Key::SelectAsteroids),
        KeyCode::Esc => Some(Key::Escape),

        // Host
        KeyCode::Char('P') => Some(Key::DebugToggle),
        KeyCode::Backspace => Some(Key::Quit),

        _ => None,
    }
}
