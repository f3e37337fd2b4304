//! srvctl-tui - Terminal UI for Server Control
//!
//! Renders [`srvctl_app::AppState`] with ratatui and feeds crossterm key
//! events back into the TEA update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
