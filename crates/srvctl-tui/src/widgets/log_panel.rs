//! Event log view
//!
//! Filter tabs across the top, then one line per entry (newest first):
//! time, severity tag, message.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Tabs, Widget},
};
use srvctl_app::scroll_state::ScrollState;
use srvctl_app::{LogFilter, SessionFeed};
use srvctl_core::LogEntry;

use super::scroll_window;
use crate::theme::{icons::IconSet, styles};

pub struct LogPanel<'a> {
    feed: &'a SessionFeed,
    filter: LogFilter,
    icons: IconSet,
}

impl<'a> LogPanel<'a> {
    pub fn new(feed: &'a SessionFeed, filter: LogFilter, icons: IconSet) -> Self {
        Self {
            feed,
            filter,
            icons,
        }
    }

    fn render_toolbar(&self, area: Rect, buf: &mut Buffer) {
        let titles = LogFilter::ALL.iter().map(|f| {
            let count = self.feed.filtered_logs(*f).count();
            format!(" {} ({count}) ", f.label())
        });
        let selected = LogFilter::ALL
            .iter()
            .position(|f| *f == self.filter)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");

        let hints = Line::from(vec![
            Span::styled("f", styles::keybinding()),
            Span::styled(" filter  ", styles::text_muted()),
            Span::styled("c", styles::keybinding()),
            Span::styled(" clear ", styles::text_muted()),
        ]);
        let hints_width = hints.width() as u16;

        let [tabs_area, hints_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);
        tabs.render(tabs_area, buf);
        buf.set_line(hints_area.x, hints_area.y, &hints, hints_area.width);
    }

    fn entry_line(&self, entry: &'a LogEntry) -> Line<'a> {
        Line::from(vec![
            Span::styled(entry.time.as_str(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.icons.dot(), styles::severity_style(entry.severity)),
            Span::raw(" "),
            Span::styled(
                format!("{:<7}", entry.severity.label()),
                styles::severity_badge(entry.severity),
            ),
            Span::raw(" "),
            Span::styled(entry.message.as_str(), styles::severity_style(entry.severity)),
        ])
    }
}

impl StatefulWidget for LogPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = styles::glass_block(true).title(Line::styled(" Event log ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        let [toolbar, body] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
        self.render_toolbar(toolbar, buf);

        let lines: Vec<Line> = self
            .feed
            .filtered_logs(self.filter)
            .map(|entry| self.entry_line(entry))
            .collect();

        if lines.is_empty() {
            state.update_content_size(0, body.height as usize);
            let text = if self.feed.logs().is_empty() {
                "Log is empty"
            } else {
                "No entries match this filter"
            };
            Paragraph::new(Line::styled(
                format!("{} {text}", self.icons.check()),
                styles::text_muted(),
            ))
            .render(body, buf);
            return;
        }

        let lines = scroll_window(lines, body, state);
        Paragraph::new(lines).render(body, buf);
    }
}
