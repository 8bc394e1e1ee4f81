//! Single-line text field used by the directory, name and domain steps
//!
//! Wraps `tui_input::Input` with the pieces the wizard needs on top:
//! focus tracking, a placeholder, and a character limit. Keystrokes are
//! translated into `InputRequest`s here so the editing rules live in one place.

use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

#[derive(Debug, Clone)]
pub struct TextField {
    input: Input,
    placeholder: &'static str,
    char_limit: usize,
    focused: bool,
}

impl TextField {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            input: Input::default(),
            placeholder,
            char_limit,
            focused: false,
        }
    }

    /// Builder-style initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set(value);
        self
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replace the value, truncated to the character limit. Cursor moves to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        let value = if value.chars().count() > self.char_limit {
            value.chars().take(self.char_limit).collect()
        } else {
            value
        };
        self.input = Input::new(value);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[cfg(test)]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Cursor column in terminal cells, relative to the start of the value
    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    fn is_full(&self) -> bool {
        self.input.value().chars().count() >= self.char_limit
    }

    fn request_for(key: &KeyEvent) -> Option<InputRequest> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let request = match key.code {
            KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
            KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
            KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
            KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
            KeyCode::Char('k') if ctrl => InputRequest::DeleteTillEnd,
            KeyCode::Char(_) if ctrl || alt => return None,
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace if ctrl || alt => InputRequest::DeletePrevWord,
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left if ctrl || alt => InputRequest::GoToPrevWord,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right if ctrl || alt => InputRequest::GoToNextWord,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return None,
        };
        Some(request)
    }
}

impl Interactive for TextField {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if !self.focused {
            return Handled::No;
        }

        let Some(request) = Self::request_for(&key) else {
            return Handled::No;
        };

        if matches!(request, InputRequest::InsertChar(_)) && self.is_full() {
            // Swallow the keystroke so it doesn't bubble anywhere else
            return Handled::Yes;
        }

        let _ = self.input.handle(request);
        Handled::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn ignores_keys_while_blurred() {
        let mut field = TextField::new("my-app", 80);
        assert_eq!(field.handle_key(key(KeyCode::Char('x'))), Handled::No);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn typing_and_backspace() {
        let mut field = TextField::new("my-app", 80);
        field.focus();
        type_str(&mut field, "demo app");
        assert_eq!(field.value(), "demo app");

        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "demo ap");
        assert_eq!(field.visual_cursor(), 7);
    }

    #[test]
    fn cursor_movement_inserts_mid_value() {
        let mut field = TextField::new("", 80);
        field.focus();
        type_str(&mut field, "ac");
        field.handle_key(key(KeyCode::Left));
        type_str(&mut field, "b");
        assert_eq!(field.value(), "abc");

        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn char_limit_is_enforced() {
        let mut field = TextField::new("", 3);
        field.focus();
        type_str(&mut field, "abcdef");
        assert_eq!(field.value(), "abc");

        field.set("0123456789");
        assert_eq!(field.value(), "012");
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut field = TextField::new("", 80).with_value("something");
        field.focus();
        field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn unrelated_control_chords_bubble() {
        let mut field = TextField::new("", 80);
        field.focus();
        let handled = field.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(handled, Handled::No);
        assert_eq!(field.handle_key(key(KeyCode::Up)), Handled::No);
    }
}
