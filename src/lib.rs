//! Server Control Library
//!
//! A terminal dashboard over a mock fleet of servers. The heavy lifting lives
//! in the workspace crates; this crate wires them into the `srvctl` binary and
//! adds the headless NDJSON mode.

pub mod headless;
pub mod startup;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use srvctl_tui::run;
pub use startup::{build_state, resolve_settings, StartupOptions};
