//! Scroll position and viewport bounds for the scrollable panels.
//!
//! Used by both the handler layer (scroll commands) and the TUI layer, which
//! reports content and viewport sizes during render.

// ─────────────────────────────────────────────────────────────────────────────
// ScrollState
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll state for a panel rendered as a list of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Whether the view follows the bottom as content grows
    pub auto_scroll: bool,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// State that follows the bottom (terminal scrollback, history)
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
            total_lines: 0,
            visible_lines: 0,
        }
    }

    /// State that stays at the top (newest-first lists such as the event log)
    pub fn pinned_top() -> Self {
        Self {
            auto_scroll: false,
            ..Self::new()
        }
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
        self.auto_scroll = false;
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + n).min(max_offset);

        // Re-enable auto-scroll if at bottom
        if self.offset >= max_offset {
            self.auto_scroll = true;
        }
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_scroll = false;
    }

    /// Scroll to bottom and enable auto-scroll
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_scroll = true;
    }

    /// Page up
    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;

        if self.auto_scroll {
            self.offset = total.saturating_sub(visible);
        } else {
            // Clamp if content shrank (e.g. log cleared)
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Range of line indices currently on screen, `(start, end)` end-exclusive
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_lines).min(self.total_lines);
        (self.offset.min(end), end)
    }
}
