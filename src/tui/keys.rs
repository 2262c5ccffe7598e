//! Translation from terminal key events to raw keystroke data.
//!
//! The line editor consumes the same byte-level stream a terminal emulator
//! would deliver, so key events are mapped back to those codes here.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Raw input data for one terminal event, if it carries any.
pub fn event_data(event: &Event) -> Option<String> {
    match event {
        Event::Key(key) => key_data(key),
        Event::Paste(text) => Some(text.clone()),
        _ => None,
    }
}

/// Raw input data for one key press.
pub fn key_data(key: &KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    let data = match key.code {
        KeyCode::Enter => "\r".to_string(),
        KeyCode::Backspace => "\x7f".to_string(),
        KeyCode::Tab => "\t".to_string(),
        KeyCode::Esc => "\x1b".to_string(),
        KeyCode::Up => "\x1b[A".to_string(),
        KeyCode::Down => "\x1b[B".to_string(),
        KeyCode::Right => "\x1b[C".to_string(),
        KeyCode::Left => "\x1b[D".to_string(),
        KeyCode::Home => "\x1b[H".to_string(),
        KeyCode::End => "\x1b[F".to_string(),
        KeyCode::Delete => "\x1b[3~".to_string(),
        KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !ch.is_ascii_alphabetic() {
                return None;
            }
            char::from((ch.to_ascii_lowercase() as u8) & 0x1f).to_string()
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(ch) => ch.to_string(),
        _ => return None,
    };
    Some(data)
}

/// True for the host-level exit chords (Ctrl-C, Ctrl-D).
pub fn is_exit_key(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}
