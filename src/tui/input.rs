// Key mapping for the wizard
//
// Translates raw crossterm key events into wizard controls. Keys that are
// not bindings are handed back untouched so the focused text field can
// edit with them.

use crate::wizard::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A wizard binding
    Control(Control),
    /// Not a binding; offer it to the focused field
    Edit(KeyEvent),
    /// Release/repeat events from terminals with keyboard enhancement
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let control = match key.code {
        KeyCode::Char('c') if ctrl => Control::Cancel,
        KeyCode::Esc => Control::Cancel,
        KeyCode::Enter => Control::Advance,
        KeyCode::Up => Control::MoveUp,
        KeyCode::Down => Control::MoveDown,
        KeyCode::Char(' ') if !ctrl && !alt => Control::Toggle,
        _ => return KeyAction::Edit(key),
    };
    KeyAction::Control(control)
}

/// Ctrl+C, the one binding honoured during the splash
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.code == KeyCode::Char('c')
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn bindings() {
        assert_eq!(map_key(press(KeyCode::Enter)), KeyAction::Control(Control::Advance));
        assert_eq!(map_key(press(KeyCode::Up)), KeyAction::Control(Control::MoveUp));
        assert_eq!(map_key(press(KeyCode::Down)), KeyAction::Control(Control::MoveDown));
        assert_eq!(map_key(press(KeyCode::Char(' '))), KeyAction::Control(Control::Toggle));
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Control(Control::Cancel));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Control(Control::Cancel)
        );
    }

    #[test]
    fn other_keys_go_to_the_field() {
        let key = press(KeyCode::Char('c'));
        assert_eq!(map_key(key), KeyAction::Edit(key));

        let key = press(KeyCode::Backspace);
        assert_eq!(map_key(key), KeyAction::Edit(key));
    }

    #[test]
    fn releases_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), KeyAction::Ignore);
        assert!(!is_interrupt(&KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }));
    }
}
