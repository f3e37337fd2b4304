//! Keyboard input as seen by the app layer.
//!
//! The TUI converts crossterm key events into [`InputKey`] so that the
//! handler and the headless runner never depend on a terminal library.

/// A key press, converted from `crossterm::event::KeyEvent` at the TUI boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,

    /// Function key F1..F12
    F(u8),
}

impl InputKey {
    /// Digit `1`..`9` as a zero-based index
    pub fn digit_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some(*c as usize - '1' as usize),
            _ => None,
        }
    }
}
