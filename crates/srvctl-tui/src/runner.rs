//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use srvctl_app::message::Message;
use srvctl_app::signals;
use srvctl_app::{process_message, AppState};
use srvctl_core::prelude::*;

use super::{event, render, terminal};

/// Run the dashboard until the user quits or a termination signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        view = %state.view,
        connection = %state.selected_connection().id,
        "Starting dashboard"
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified message channel for the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    ratatui::restore();

    info!(
        commands = state.feed.commands().len(),
        "Dashboard closed"
    );
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}
