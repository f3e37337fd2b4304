//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::view::View;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Show a view from the sidebar
    SelectView(View),
    NextView,
    PrevView,

    /// Select the connection at this registry index and open the terminal
    ActivateConnection(usize),

    /// Move the connections-list cursor
    ConnectionCursorUp,
    ConnectionCursorDown,

    // ─────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────
    /// Next reachable connection in the terminal target selector
    NextTarget,
    /// Previous reachable connection in the terminal target selector
    PrevTarget,

    /// Append a character to the command line
    InputChar(char),
    /// Delete the last character of the command line
    InputBackspace,
    /// Empty the command line
    InputClear,
    /// Run the command line against the selected connection
    SubmitCommand,

    // ─────────────────────────────────────────────────────────
    // Event log
    // ─────────────────────────────────────────────────────────
    ClearLog,
    CycleLogFilter,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages (apply to the active view)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Settings form
    // ─────────────────────────────────────────────────────────
    SettingsNextField,
    SettingsPrevField,
    SettingsStartEdit,
    SettingsInput(char),
    SettingsBackspace,
    SettingsCommitEdit,
    SettingsCancelEdit,
    /// Acknowledge "save"; nothing is persisted
    SettingsSave,
}
