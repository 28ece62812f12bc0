use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Intent;

// Russian ЙЦУКЕН letters and the QWERTY keys they sit on, row by row
const JCUKEN: &str = "йцукенгшщзфывапролдячсмить";
const QWERTY: &str = "qwertyuiopasdfghjklzxcvbnm";

/// Map a character to the QWERTY key in the same position, so vim-style keys
/// work regardless of the active keyboard layout. Case is preserved.
pub fn to_qwerty(c: char) -> char {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let Some(position) = JCUKEN.chars().position(|k| k == lower) else {
        return c;
    };
    match QWERTY.chars().nth(position) {
        Some(q) if c.is_uppercase() => q.to_ascii_uppercase(),
        Some(q) => q,
        None => c,
    }
}

/// Check if a KeyCode is the given character on any supported layout.
/// Lowercase `expected` matches either case; uppercase matches exactly.
pub fn key_matches(key: &KeyCode, expected: char) -> bool {
    let KeyCode::Char(c) = key else {
        return false;
    };
    let normalized = to_qwerty(*c);
    if expected.is_uppercase() {
        normalized == expected
    } else {
        normalized.to_ascii_lowercase() == expected
    }
}

/// Map a key event to a menu intent.
///
/// Arrows and vim keys navigate, Enter/Space select, Esc/Backspace go back.
pub fn map_key_to_intent(key: &KeyEvent) -> Option<Intent> {
    let code = &key.code;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key_matches(code, 'c') {
        return Some(Intent::Quit);
    }
    if key_matches(code, 'q') {
        return Some(Intent::Quit);
    }

    match code {
        KeyCode::Up | KeyCode::BackTab => Some(Intent::MoveUp),
        KeyCode::Down | KeyCode::Tab => Some(Intent::MoveDown),
        KeyCode::Left => Some(Intent::MoveLeft),
        KeyCode::Right => Some(Intent::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(Intent::Back),
        _ if key_matches(code, 'k') => Some(Intent::MoveUp),
        _ if key_matches(code, 'j') => Some(Intent::MoveDown),
        _ if key_matches(code, 'h') => Some(Intent::MoveLeft),
        _ if key_matches(code, 'l') => Some(Intent::MoveRight),
        _ => None,
    }
}
