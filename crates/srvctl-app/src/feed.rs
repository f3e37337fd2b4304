//! Session feed - command history and event log for this run.
//!
//! History is oldest-first (appended), the event log is newest-first
//! (prepended). Ids come from the collection length at insertion time, so log
//! ids start over after [`SessionFeed::clear_log`].

use std::collections::VecDeque;

use srvctl_core::{mock, CommandEntry, LogEntry};

/// Display filter for the log view. Never changes the stored log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFilter {
    #[default]
    All,
    Errors,
    Warnings,
}

impl LogFilter {
    pub fn cycle(self) -> Self {
        match self {
            LogFilter::All => LogFilter::Errors,
            LogFilter::Errors => LogFilter::Warnings,
            LogFilter::Warnings => LogFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogFilter::All => "All",
            LogFilter::Errors => "Errors",
            LogFilter::Warnings => "Warnings",
        }
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Errors => entry.is_error(),
            LogFilter::Warnings => entry.is_warning(),
        }
    }

    pub const ALL: [LogFilter; 3] = [LogFilter::All, LogFilter::Errors, LogFilter::Warnings];
}

/// The pair of in-memory collections recording this session's activity
#[derive(Debug, Clone, Default)]
pub struct SessionFeed {
    commands: Vec<CommandEntry>,
    logs: VecDeque<LogEntry>,
}

impl SessionFeed {
    /// Empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed pre-populated with the mock event log and command history
    pub fn seeded() -> Self {
        Self {
            commands: mock::commands(),
            logs: mock::logs().into(),
        }
    }

    /// Append to history with id = len + 1. Returns the assigned id.
    pub fn record_command(&mut self, mut entry: CommandEntry) -> u64 {
        entry.id = self.commands.len() as u64 + 1;
        let id = entry.id;
        self.commands.push(entry);
        id
    }

    /// Insert at the head of the log with id = len + 1. Returns the assigned id.
    pub fn record_log(&mut self, mut entry: LogEntry) -> u64 {
        entry.id = self.logs.len() as u64 + 1;
        let id = entry.id;
        self.logs.push_front(entry);
        id
    }

    /// Drop every log entry; history is untouched
    pub fn clear_log(&mut self) {
        self.logs.clear();
    }

    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    /// Log entries, most recent first
    pub fn logs(&self) -> &VecDeque<LogEntry> {
        &self.logs
    }

    pub fn latest_command(&self) -> Option<&CommandEntry> {
        self.commands.last()
    }

    pub fn latest_log(&self) -> Option<&LogEntry> {
        self.logs.front()
    }

    /// Up to `n` most recent log entries
    pub fn recent_logs(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().take(n)
    }

    pub fn filtered_logs(&self, filter: LogFilter) -> impl Iterator<Item = &LogEntry> {
        self.logs.iter().filter(move |entry| filter.matches(entry))
    }
}
