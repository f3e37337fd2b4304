//! Dashboard view: stat cards, connection summary and recent events.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use srvctl_app::SessionFeed;
use srvctl_core::Registry;

use crate::theme::{icons::IconSet, palette, styles};

/// Figures the dashboard shows but nothing computes
const COMMANDS_TODAY: &str = "47";
const AVG_RESPONSE: &str = "12ms";
const ERRORS: &str = "2";

pub struct Dashboard<'a> {
    registry: &'a Registry,
    feed: &'a SessionFeed,
    preview: usize,
    icons: IconSet,
}

impl<'a> Dashboard<'a> {
    pub fn new(registry: &'a Registry, feed: &'a SessionFeed, icons: IconSet) -> Self {
        Self {
            registry,
            feed,
            preview: 6,
            icons,
        }
    }

    /// Number of log entries in "Recent events"
    pub fn preview(mut self, n: usize) -> Self {
        self.preview = n;
        self
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let active = self.registry.online_count().to_string();
        let cards = [
            ("Active", active.as_str(), palette::STATUS_GREEN),
            ("Commands today", COMMANDS_TODAY, palette::STATUS_BLUE),
            ("Avg response", AVG_RESPONSE, palette::STATUS_YELLOW),
            ("Errors", ERRORS, palette::STATUS_RED),
        ];

        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((label, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*card_area);
            block.render(*card_area, buf);

            let lines = vec![
                Line::styled(label, styles::text_secondary()),
                Line::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }

    fn render_connections(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Connections ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.registry.len() * 2);
        for conn in self.registry.iter() {
            let (dot, _, dot_style) = styles::status_indicator(conn.status);
            lines.push(Line::from(vec![
                Span::styled(dot, dot_style),
                Span::raw(" "),
                Span::styled(conn.name.as_str(), styles::text_primary()),
                Span::raw("  "),
                Span::styled(conn.last_seen.as_str(), styles::text_muted()),
            ]));
            lines.push(Line::styled(
                format!("  {} · {}", conn.ip, conn.os),
                styles::text_muted(),
            ));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_recent_events(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Recent events ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .feed
            .recent_logs(self.preview)
            .map(|log| {
                Line::from(vec![
                    Span::styled(log.time.as_str(), styles::text_muted()),
                    Span::raw(" "),
                    Span::styled(log.message.as_str(), styles::severity_style(log.severity)),
                ])
            })
            .collect();

        if lines.is_empty() {
            Paragraph::new(Line::styled(
                format!("{} No events", self.icons.check()),
                styles::text_muted(),
            ))
            .render(inner, buf);
        } else {
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [stats, panels] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);
        let [connections, events] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(panels);

        self.render_stats(stats, buf);
        self.render_connections(connections, buf);
        self.render_recent_events(events, buf);
    }
}
