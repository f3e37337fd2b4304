//! Header bar widget
//!
//! Active view label on the left; connection pill and version badge on the
//! right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use srvctl_app::View;
use srvctl_core::Connection;

use crate::theme::styles;

/// Dashboard version shown in the header badge and terminal banner
pub const VERSION_BADGE: &str = "v2.4.1";

pub struct MainHeader<'a> {
    view: View,
    connection: &'a Connection,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: View, connection: &'a Connection) -> Self {
        Self { view, connection }
    }

    fn right_line(&self) -> Line<'a> {
        let (dot, _, dot_style) = styles::status_indicator(self.connection.status);
        Line::from(vec![
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("Connected to ", styles::text_secondary()),
            Span::styled(self.connection.name.as_str(), styles::accent()),
            Span::raw("  "),
            Span::styled(format!("[{VERSION_BADGE}]"), styles::text_muted()),
            Span::raw(" "),
        ])
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.view.label(), styles::text_bright()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right-align the pill when it fits next to the label
        let right = self.right_line();
        let right_width = right.width() as u16;
        if left_width + right_width + 1 <= inner.width {
            let x = inner.right() - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}
