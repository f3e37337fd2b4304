//! Headless mode - NDJSON event output instead of the TUI
//!
//! Commands are read from stdin one per line and submitted to the selected
//! connection. Every recorded command and log entry is written to stdout as a
//! single JSON object with an `event` tag.
//!
//! # Example Output
//!
//! ```json
//! {"event":"command","id":3,"host":"srv-01","input":"whoami","output":"root","time":"17:42:01"}
//! {"event":"log","id":9,"severity":"info","message":"[srv-01] Command executed: whoami","time":"17:42:01"}
//! ```

pub mod runner;

use std::io::{self, Write};

use serde::Serialize;
use srvctl_core::prelude::*;
use srvctl_core::{CommandEntry, LogEntry, Severity};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A command was appended to the history
    Command {
        id: u64,
        host: String,
        input: String,
        output: String,
        time: String,
    },

    /// An entry was prepended to the event log
    Log {
        id: u64,
        severity: Severity,
        message: String,
        time: String,
    },

    /// A failure that did not stop the run
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    pub fn command(entry: &CommandEntry) -> Self {
        Self::Command {
            id: entry.id,
            host: entry.host.clone(),
            input: entry.input.clone(),
            output: entry.output.clone(),
            time: entry.time.clone(),
        }
    }

    pub fn log(entry: &LogEntry) -> Self {
        Self::Log {
            id: entry.id,
            severity: entry.severity,
            message: entry.message.clone(),
            time: entry.time.clone(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Emit this event to stdout, logging instead of failing
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }
}
