//! Shutdown on SIGINT/SIGTERM (Ctrl+C outside unix)

use tokio::sync::mpsc;

use crate::message::Message;
use srvctl_core::prelude::*;

/// Listen for a shutdown signal in the background and forward it as [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!(signal = name, "Shutting down");
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Signal listener unavailable: {e}"),
        }
    });
}

/// Resolves with the name of the first shutdown signal delivered
#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {kind:?}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt())?;
    let mut terminate = listen(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok("Ctrl+C")
}
