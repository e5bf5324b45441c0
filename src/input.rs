//! Input handling - key translation for the code box host

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Editing actions the host understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Save,
    Quit,
}

/// Translate a crossterm KeyEvent to an action
pub fn translate_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Only process key press events, ignore release and repeat
    // This is critical on Windows where crossterm sends all event types
    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    match code {
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            's' => Some(Action::Save),
            'a' => Some(Action::Home),
            'e' => Some(Action::End),
            'f' => Some(Action::Right),
            'b' => Some(Action::Left),
            'n' => Some(Action::Down),
            'p' => Some(Action::Up),
            'd' => Some(Action::Delete),
            'm' | 'j' => Some(Action::Newline),
            _ => None,
        },
        KeyCode::Char(ch) => Some(Action::Insert(ch)),
        KeyCode::Enter => Some(Action::Newline),
        KeyCode::Tab => Some(Action::Insert(' ')),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Char('('), KeyModifiers::NONE)),
            Some(Action::Insert('('))
        );
        assert_eq!(
            translate_key(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Newline)
        );
        assert_eq!(translate_key(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('S'), KeyModifiers::CONTROL)),
            Some(Action::Save)
        );
        assert_eq!(translate_key(press(KeyCode::Char('z'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate_key(event), None);
    }
}
