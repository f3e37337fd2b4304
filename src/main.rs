//! Server Control - a terminal dashboard for a mock server fleet
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use server_control::{build_state, resolve_settings, StartupOptions};
use srvctl_app::View;
use srvctl_core::logging;

/// Server Control - a terminal dashboard for a mock server fleet
#[derive(Parser, Debug)]
#[command(name = "srvctl", version)]
#[command(about = "A terminal dashboard for remote server administration", long_about = None)]
struct Args {
    /// Settings file (default: <config_dir>/server-control/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Connection id to select at startup (e.g. srv-02)
    #[arg(long, value_name = "ID")]
    connection: Option<String>,

    /// View to open at startup (dashboard, terminal, connections, logs,
    /// monitoring, history, settings)
    #[arg(long, value_name = "VIEW")]
    view: Option<View>,

    /// Run in headless mode (commands on stdin, NDJSON on stdout, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let settings = resolve_settings(args.config.as_deref())?;
    let options = StartupOptions {
        connection: args.connection,
        view: args.view,
    };
    let state = build_state(settings, &options)?;

    if args.headless {
        server_control::run_headless(state).await?;
    } else {
        server_control::run(state).await?;
    }
    Ok(())
}
