//! Sidebar navigation
//!
//! App title, one entry per view with its shortcut digit, and an
//! "online" counter in the footer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use srvctl_app::View;

use crate::theme::{icons::IconSet, palette, styles};

pub const APP_TITLE: &str = "ServerControl";

pub struct Sidebar {
    active: View,
    online: usize,
    total: usize,
    icons: IconSet,
    compact: bool,
}

impl Sidebar {
    pub fn new(active: View, online: usize, total: usize, icons: IconSet) -> Self {
        Self {
            active,
            online,
            total,
            icons,
            compact: false,
        }
    }

    /// Icons and digits only
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn title_line(&self) -> Line<'static> {
        let logo = Span::styled(self.icons.logo(), styles::accent_bold());
        if self.compact {
            Line::from(vec![Span::raw(" "), logo])
        } else {
            Line::from(vec![
                Span::raw(" "),
                logo,
                Span::raw(" "),
                Span::styled(APP_TITLE, styles::text_bright()),
            ])
        }
    }

    fn nav_line(&self, view: View, width: u16) -> Line<'static> {
        let active = view == self.active;
        let digit = (view.index() + 1).to_string();
        let mut spans = vec![
            Span::styled(format!(" {digit} "), styles::keybinding()),
            Span::raw(self.icons.view(view)),
        ];
        if !self.compact {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(view.label()));
        }

        let line = Line::from(spans);
        if active {
            // Pad so the highlight spans the whole row
            let pad = usize::from(width).saturating_sub(line.width());
            let mut spans = line.spans;
            spans.push(Span::raw(" ".repeat(pad)));
            Line::from(spans).style(styles::focused_selected())
        } else {
            line.style(styles::text_secondary())
        }
    }

    fn footer_line(&self) -> Line<'static> {
        let dot = Span::styled("● ", Style::default().fg(palette::STATUS_GREEN));
        if self.compact {
            Line::from(vec![
                Span::raw(" "),
                dot,
                Span::styled(self.online.to_string(), styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                dot,
                Span::styled(
                    format!("{} of {} online", self.online, self.total),
                    styles::text_muted(),
                ),
            ])
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(styles::border_inactive())
            .style(Style::default().bg(palette::SIDEBAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.title_line(), inner.width);

        let nav_top = inner.y + 2;
        let nav_bottom = inner.bottom().saturating_sub(1);
        for (i, view) in View::ALL.iter().enumerate() {
            let y = nav_top + i as u16;
            if y >= nav_bottom {
                break;
            }
            buf.set_line(inner.x, y, &self.nav_line(*view, inner.width), inner.width);
        }

        buf.set_line(inner.x, nav_bottom, &self.footer_line(), inner.width);
    }
}
