//! Custom widget components

mod connections;
mod dashboard;
mod header;
mod history;
mod log_panel;
mod monitoring;
mod settings_panel;
mod sidebar;
mod terminal_panel;

pub use connections::ConnectionList;
pub use dashboard::Dashboard;
pub use header::{MainHeader, VERSION_BADGE};
pub use history::HistoryPanel;
pub use log_panel::LogPanel;
pub use monitoring::Monitoring;
pub use settings_panel::SettingsPanel;
pub use sidebar::{Sidebar, APP_TITLE};
pub use terminal_panel::TerminalPanel;

// Re-export state types from app layer (these are used by render/)
pub use srvctl_app::scroll_state::ScrollState;

use ratatui::layout::Rect;
use ratatui::text::Line;

/// Report the content size to `scroll` and keep only the lines on screen
pub(crate) fn scroll_window<'a>(
    lines: Vec<Line<'a>>,
    area: Rect,
    scroll: &mut ScrollState,
) -> Vec<Line<'a>> {
    scroll.update_content_size(lines.len(), area.height as usize);
    let (start, end) = scroll.visible_range();
    lines
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::raw(format!("line {i}"))).collect()
    }

    #[test]
    fn test_window_follows_bottom() {
        let mut scroll = ScrollState::new();
        let visible = scroll_window(lines(10), Rect::new(0, 0, 10, 4), &mut scroll);

        assert_eq!(visible.len(), 4);
        assert_eq!(visible[0], Line::raw("line 6"));
        assert_eq!(scroll.offset, 6);
    }

    #[test]
    fn test_window_pinned_top() {
        let mut scroll = ScrollState::pinned_top();
        let visible = scroll_window(lines(10), Rect::new(0, 0, 10, 4), &mut scroll);

        assert_eq!(visible[0], Line::raw("line 0"));
    }

    #[test]
    fn test_short_content_fits() {
        let mut scroll = ScrollState::new();
        let visible = scroll_window(lines(2), Rect::new(0, 0, 10, 4), &mut scroll);

        assert_eq!(visible.len(), 2);
        assert_eq!(scroll.offset, 0);
    }
}
