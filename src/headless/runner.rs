//! Headless mode runner - main event loop without TUI

use std::io::{self, BufRead, Write};

use tokio::sync::mpsc;

use srvctl_app::message::Message;
use srvctl_app::{process_message, signals, AppState};
use srvctl_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output NDJSON events instead of TUI
pub async fn run_headless(mut state: AppState) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Server Control starting in HEADLESS mode");
    info!("Target: {}", state.selected_connection().id);
    info!("═══════════════════════════════════════════════════════");

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let (line_tx, mut line_rx) = mpsc::channel::<io::Result<String>>(64);
    std::thread::spawn(move || spawn_stdin_reader_blocking(line_tx));

    let mut stdout = io::stdout();
    while !state.should_quit() {
        tokio::select! {
            Some(msg) = msg_rx.recv() => process_message(&mut state, msg),
            line = line_rx.recv() => match line {
                Some(Ok(line)) => {
                    submit_line(&mut state, &line, &mut stdout.lock())?;
                }
                Some(Err(e)) => {
                    error!("Failed to read stdin: {}", e);
                    HeadlessEvent::error(format!("Failed to read stdin: {}", e)).emit();
                    break;
                }
                None => {
                    info!("Stdin closed");
                    break;
                }
            },
        }
    }

    // Make sure nothing is left buffered when the process exits
    stdout.flush().context("Failed to flush headless stdout")?;

    info!(
        commands = state.feed.commands().len(),
        logs = state.feed.logs().len(),
        "Server Control headless mode exiting"
    );
    Ok(())
}

/// Submit one stdin line to the selected connection.
///
/// Returns `true` when the line was recorded; blank lines are skipped and
/// produce no output.
pub fn submit_line<W: Write>(state: &mut AppState, line: &str, out: &mut W) -> Result<bool> {
    state.command_input = line.to_string();
    if state.submit_command().is_none() {
        state.command_input.clear();
        return Ok(false);
    }

    if let Some(cmd) = state.feed.latest_command() {
        HeadlessEvent::command(cmd).write_to(out)?;
    }
    if let Some(log) = state.feed.latest_log() {
        HeadlessEvent::log(log).write_to(out)?;
    }
    Ok(true)
}

/// Forward stdin lines to the event loop (blocking, runs on its own thread)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<io::Result<String>>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let failed = line.is_err();
        if line_tx.blocking_send(line).is_err() || failed {
            break;
        }
    }
    debug!("Stdin reader exiting");
}
