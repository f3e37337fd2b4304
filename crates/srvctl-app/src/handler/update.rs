//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectView(view) => {
            if state.view != view {
                debug!("View: {} -> {}", state.view, view);
                state.view = view;
            }
            UpdateResult::none()
        }
        Message::NextView => UpdateResult::message(Message::SelectView(state.view.next())),
        Message::PrevView => UpdateResult::message(Message::SelectView(state.view.prev())),

        Message::ActivateConnection(index) => {
            state.activate_connection(index);
            UpdateResult::none()
        }
        Message::ConnectionCursorUp => {
            state.connection_cursor = state.connection_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ConnectionCursorDown => {
            let last = state.registry.len().saturating_sub(1);
            state.connection_cursor = (state.connection_cursor + 1).min(last);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Terminal
        // ─────────────────────────────────────────────────────────
        Message::NextTarget => {
            state.cycle_target(true);
            UpdateResult::none()
        }
        Message::PrevTarget => {
            state.cycle_target(false);
            UpdateResult::none()
        }
        Message::InputChar(c) => {
            state.command_input.push(c);
            UpdateResult::none()
        }
        Message::InputBackspace => {
            state.command_input.pop();
            UpdateResult::none()
        }
        Message::InputClear => {
            state.command_input.clear();
            UpdateResult::none()
        }
        Message::SubmitCommand => {
            if let Some(submission) = state.submit_command() {
                debug!(
                    "Recorded command #{} (log #{}) on {}",
                    submission.command_id,
                    submission.log_id,
                    state.selected_connection().id
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Event log
        // ─────────────────────────────────────────────────────────
        Message::ClearLog => {
            state.clear_log();
            UpdateResult::none()
        }
        Message::CycleLogFilter => {
            state.log_filter = state.log_filter.cycle();
            state.log_scroll.scroll_to_top();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll(state, |s| s.scroll_up(1)),
        Message::ScrollDown => scroll(state, |s| s.scroll_down(1)),
        Message::ScrollToTop => scroll(state, |s| s.scroll_to_top()),
        Message::ScrollToBottom => scroll(state, |s| s.scroll_to_bottom()),
        Message::PageUp => scroll(state, |s| s.page_up()),
        Message::PageDown => scroll(state, |s| s.page_down()),

        // ─────────────────────────────────────────────────────────
        // Settings form
        // ─────────────────────────────────────────────────────────
        Message::SettingsNextField => {
            state.settings_form.select_next();
            UpdateResult::none()
        }
        Message::SettingsPrevField => {
            state.settings_form.select_previous();
            UpdateResult::none()
        }
        Message::SettingsStartEdit => {
            state.settings_form.start_editing();
            UpdateResult::none()
        }
        Message::SettingsInput(c) => {
            state.settings_form.push_char(c);
            UpdateResult::none()
        }
        Message::SettingsBackspace => {
            state.settings_form.backspace();
            UpdateResult::none()
        }
        Message::SettingsCommitEdit => {
            state.settings_form.commit_edit();
            UpdateResult::none()
        }
        Message::SettingsCancelEdit => {
            state.settings_form.cancel_edit();
            UpdateResult::none()
        }
        Message::SettingsSave => {
            info!(
                "Settings save requested ({} fields, not persisted)",
                state.settings_form.fields.len()
            );
            state.settings_form.acknowledge_save();
            UpdateResult::none()
        }
    }
}

fn scroll(
    state: &mut AppState,
    f: impl FnOnce(&mut crate::scroll_state::ScrollState),
) -> UpdateResult {
    if let Some(scroll_state) = state.active_scroll_mut() {
        f(scroll_state);
    }
    UpdateResult::none()
}
