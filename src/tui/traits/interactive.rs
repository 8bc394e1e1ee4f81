//! Interactive trait for widgets that handle keyboard input

use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the caller whether the event was consumed or should be
/// passed on to the next handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed
    Yes,
    /// Event was not meaningful here, pass it on
    No,
}

/// Trait for widgets that take raw keystrokes
///
/// Returns `Handled::Yes` if the widget consumed the key,
/// `Handled::No` if it should bubble up.
pub trait Interactive {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;
}
