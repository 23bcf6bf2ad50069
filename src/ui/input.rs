use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Previous,
    Next,
    ScrollUp,
    ScrollDown,
    Quit,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c') || ch.eq_ignore_ascii_case(&'q') => {
                InputAction::Quit
            }
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => InputAction::Previous,
        KeyCode::Right | KeyCode::Char('l') => InputAction::Next,
        KeyCode::Up | KeyCode::Char('k') => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => InputAction::ScrollDown,
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        _ => InputAction::None,
    }
}
