//! Screen layout definitions for the TUI
//!
//! Sidebar on the left, header bar and content on the right. Narrow
//! terminals collapse the sidebar to icons only.

use ratatui::layout::{Constraint, Layout, Rect};

/// Full sidebar width (title, labels, footer)
pub const SIDEBAR_WIDTH: u16 = 26;

/// Collapsed sidebar width (icons + shortcut digit)
pub const SIDEBAR_COMPACT_WIDTH: u16 = 7;

/// Below this terminal width the sidebar collapses
pub const COMPACT_BREAKPOINT: u16 = 90;

const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    /// View label, connection pill and version badge
    pub header: Rect,
    /// Active view
    pub content: Rect,
    pub compact: bool,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let compact = area.width < COMPACT_BREAKPOINT;
    let sidebar_width = if compact {
        SIDEBAR_COMPACT_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(20)]).areas(area);
    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(main);

    ScreenAreas {
        sidebar,
        header,
        content,
        compact,
    }
}
