//! Application state (Model in TEA pattern)

use std::sync::Arc;

use srvctl_core::prelude::*;
use srvctl_core::{CommandEntry, Connection, LogEntry, Registry, Severity};

use crate::clock::{Clock, SystemClock};
use crate::config::Settings;
use crate::feed::{LogFilter, SessionFeed};
use crate::interpreter::CommandInterpreter;
use crate::scroll_state::ScrollState;
use crate::settings_form::SettingsFormState;
use crate::view::View;

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Ids assigned by a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub command_id: u64,
    pub log_id: u64,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Panel shown in the content area
    pub view: View,

    /// Known connections (never mutated after startup)
    pub registry: Registry,

    /// Index into `registry` of the connection commands run against.
    /// Always in bounds: the registry is never empty.
    pub selected: usize,

    /// Text being typed in the terminal view
    pub command_input: String,

    /// Command history and event log
    pub feed: SessionFeed,

    pub interpreter: CommandInterpreter,

    pub clock: Arc<dyn Clock>,

    /// Application settings from config file
    pub settings: Settings,

    pub phase: AppPhase,

    // Per-view UI state
    pub terminal_scroll: ScrollState,
    pub log_scroll: ScrollState,
    pub history_scroll: ScrollState,
    pub connection_cursor: usize,
    pub log_filter: LogFilter,
    pub settings_form: SettingsFormState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Mock registry, default settings, system clock
    pub fn new() -> Self {
        Self::with_settings(Registry::mock(), Settings::default())
    }

    pub fn with_settings(registry: Registry, settings: Settings) -> Self {
        Self::with_clock(registry, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Registry, settings: Settings, clock: Arc<dyn Clock>) -> Self {
        let feed = if settings.feed.seed_mock_data {
            SessionFeed::seeded()
        } else {
            SessionFeed::new()
        };

        Self {
            view: settings.ui.initial_view,
            registry,
            selected: 0,
            command_input: String::new(),
            feed,
            interpreter: CommandInterpreter::new(),
            clock,
            settings,
            phase: AppPhase::Running,
            terminal_scroll: ScrollState::new(),
            log_scroll: ScrollState::pinned_top(),
            history_scroll: ScrollState::new(),
            connection_cursor: 0,
            log_filter: LogFilter::All,
            settings_form: SettingsFormState::new(),
        }
    }

    /// The connection commands are submitted against
    pub fn selected_connection(&self) -> &Connection {
        &self.registry.as_slice()[self.selected]
    }

    /// Select by registry index. Out-of-range indices are ignored.
    pub fn select_connection(&mut self, index: usize) -> bool {
        if index < self.registry.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Select by connection id (used by `--connection`)
    pub fn select_connection_by_id(&mut self, id: &str) -> Result<()> {
        let index = self
            .registry
            .position(id)
            .ok_or_else(|| Error::unknown_connection(id))?;
        self.selected = index;
        self.connection_cursor = index;
        Ok(())
    }

    /// Select the connection at `index` and switch to the terminal
    pub fn activate_connection(&mut self, index: usize) {
        if self.select_connection(index) {
            self.connection_cursor = index;
            self.view = View::Terminal;
            debug!(
                "Activated connection {}",
                self.selected_connection().id
            );
        }
    }

    /// Step through the terminal target selector (non-offline connections).
    ///
    /// When the current selection is offline it is not in the list, so the
    /// first (forward) or last (backward) entry is chosen.
    pub fn cycle_target(&mut self, forward: bool) {
        let targets = self.registry.reachable_indices();
        if targets.is_empty() {
            return;
        }

        let next = match targets.iter().position(|&i| i == self.selected) {
            Some(pos) if forward => targets[(pos + 1) % targets.len()],
            Some(pos) => targets[(pos + targets.len() - 1) % targets.len()],
            None if forward => targets[0],
            None => targets[targets.len() - 1],
        };
        self.selected = next;
    }

    /// Run the command line against the selected connection.
    ///
    /// Blank input is ignored and left in place. Otherwise records exactly
    /// one history entry and one log entry, then clears the input.
    pub fn submit_command(&mut self) -> Option<Submission> {
        let command = self.command_input.trim();
        if command.is_empty() {
            return None;
        }

        let target = self.selected_connection();
        let host = target.id.clone();
        let output = self
            .interpreter
            .execute(command, target, self.clock.as_ref());

        let input = std::mem::take(&mut self.command_input);
        let message = format!("[{host}] Command executed: {input}");

        let command_id = self.feed.record_command(CommandEntry::new(
            input,
            output,
            self.clock.timestamp(),
            host,
        ));
        let log_id = self.feed.record_log(LogEntry::new(
            self.clock.timestamp(),
            Severity::Info,
            message,
        ));

        if self.settings.terminal.auto_scroll {
            self.terminal_scroll.scroll_to_bottom();
            self.history_scroll.scroll_to_bottom();
        }

        Some(Submission { command_id, log_id })
    }

    /// Empty the event log; history is kept
    pub fn clear_log(&mut self) {
        let dropped = self.feed.logs().len();
        self.feed.clear_log();
        self.log_scroll.scroll_to_top();
        info!("Cleared event log ({} entries)", dropped);
    }

    /// Scroll state of the active view, if it scrolls
    pub fn active_scroll_mut(&mut self) -> Option<&mut ScrollState> {
        match self.view {
            View::Terminal => Some(&mut self.terminal_scroll),
            View::Logs => Some(&mut self.log_scroll),
            View::History => Some(&mut self.history_scroll),
            _ => None,
        }
    }

    /// Whether printable keys go to a text field instead of shortcuts
    pub fn is_text_entry(&self) -> bool {
        match self.view {
            View::Terminal => true,
            View::Settings => self.settings_form.editing,
            _ => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
