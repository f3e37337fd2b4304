//! Key event handlers for the individual views

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use crate::view::View;

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(key) {
        return Some(msg);
    }

    match state.view {
        View::Terminal => handle_key_terminal(key),
        View::Settings if state.settings_form.editing => handle_key_settings_edit(key),
        _ => handle_key_navigation(key).or_else(|| match state.view {
            View::Connections => handle_key_connections(state, key),
            View::Logs => handle_key_logs(key),
            View::History => handle_key_scroll(key),
            View::Settings => handle_key_settings(key),
            _ => None,
        }),
    }
}

/// Keys that work everywhere, including text entry
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::F(n @ 1..=7) => View::from_index(usize::from(n) - 1).map(Message::SelectView),
        _ => None,
    }
}

/// View switching and quit, only outside text entry
fn handle_key_navigation(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Tab => Some(Message::NextView),
        InputKey::BackTab => Some(Message::PrevView),
        _ => key
            .digit_index()
            .and_then(View::from_index)
            .map(Message::SelectView),
    }
}

fn handle_key_terminal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitCommand),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Char(c) => Some(Message::InputChar(c)),

        // Target selector
        InputKey::Tab => Some(Message::NextTarget),
        InputKey::BackTab => Some(Message::PrevTarget),

        // Leave the command line
        InputKey::Esc => Some(Message::SelectView(View::Dashboard)),

        _ => handle_key_scroll(key),
    }
}

fn handle_key_connections(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::ConnectionCursorUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ConnectionCursorDown),
        InputKey::Enter => Some(Message::ActivateConnection(state.connection_cursor)),
        _ => None,
    }
}

fn handle_key_logs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('f') => Some(Message::CycleLogFilter),
        InputKey::Char('c') => Some(Message::ClearLog),
        _ => handle_key_scroll(key),
    }
}

/// Scrolling for list-like views
fn handle_key_scroll(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::SettingsNextField),
        InputKey::Char('k') | InputKey::Up => Some(Message::SettingsPrevField),
        InputKey::Enter => Some(Message::SettingsStartEdit),
        InputKey::Char('s') | InputKey::CharCtrl('s') => Some(Message::SettingsSave),
        _ => None,
    }
}

fn handle_key_settings_edit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SettingsCommitEdit),
        InputKey::Esc => Some(Message::SettingsCancelEdit),
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::Char(c) => Some(Message::SettingsInput(c)),
        _ => None,
    }
}
