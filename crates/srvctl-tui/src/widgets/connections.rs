//! Connections view: one card row per registry entry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use srvctl_core::{Connection, Registry};

use crate::theme::{icons::IconSet, palette, styles};

/// Rows per connection (name line, details line, spacer)
const ROW_HEIGHT: u16 = 3;

/// CPU percentage above which the reading is highlighted
const CPU_HIGHLIGHT: u8 = 70;
/// RAM percentage above which the reading is highlighted
const RAM_HIGHLIGHT: u8 = 80;

pub struct ConnectionList<'a> {
    registry: &'a Registry,
    selected: usize,
    cursor: usize,
    icons: IconSet,
}

impl<'a> ConnectionList<'a> {
    pub fn new(registry: &'a Registry, selected: usize, cursor: usize, icons: IconSet) -> Self {
        Self {
            registry,
            selected,
            cursor,
            icons,
        }
    }

    fn reading(value: u8, threshold: u8) -> Span<'static> {
        let style = if value > threshold {
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::text_primary()
        };
        Span::styled(format!("{value:>3}%"), style)
    }

    fn name_line(&self, conn: &'a Connection, index: usize) -> Line<'a> {
        let (dot, label, dot_style) = styles::status_indicator(conn.status);
        let marker = if index == self.cursor {
            Span::styled(format!("{} ", self.icons.chevron_right()), styles::accent_bold())
        } else {
            Span::raw("  ")
        };

        let mut spans = vec![
            marker,
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(conn.name.as_str(), styles::text_bright()),
            Span::raw(" "),
            Span::styled(format!("({label})"), dot_style),
        ];
        if index == self.selected {
            spans.push(Span::styled("  [selected]", styles::accent()));
        }
        Line::from(spans)
    }

    fn detail_line(&self, conn: &'a Connection) -> Line<'a> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{} · {} · Uptime: {}", conn.ip, conn.os, conn.uptime),
                styles::text_muted(),
            ),
        ])
    }

    fn readings_line(conn: &Connection) -> Line<'static> {
        Line::from(vec![
            Span::styled("CPU ", styles::text_muted()),
            Self::reading(conn.cpu, CPU_HIGHLIGHT),
            Span::styled("  RAM ", styles::text_muted()),
            Self::reading(conn.ram, RAM_HIGHLIGHT),
            Span::raw(" "),
        ])
    }
}

impl Widget for ConnectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Line::from(vec![
            Span::styled(" Connections ", styles::text_secondary()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open terminal ", styles::text_muted()),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        for (index, conn) in self.registry.iter().enumerate() {
            let y = inner.y + index as u16 * ROW_HEIGHT;
            if y + 1 >= inner.bottom() {
                break;
            }

            if index == self.cursor {
                let row = Rect::new(inner.x, y, inner.width, 2);
                buf.set_style(row, Style::default().bg(palette::SIDEBAR_BG));
            }

            buf.set_line(inner.x, y, &self.name_line(conn, index), inner.width);
            buf.set_line(inner.x, y + 1, &self.detail_line(conn), inner.width);

            let readings = Self::readings_line(conn);
            let width = readings.width() as u16;
            if width < inner.width {
                buf.set_line(inner.right() - width, y, &readings, width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use srvctl_app::config::IconMode;
    use srvctl_core::ConnectionStatus;

    fn render(registry: &Registry, selected: usize, cursor: usize) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 16);
        term.render_widget(
            ConnectionList::new(registry, selected, cursor, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_every_connection_listed() {
        let registry = Registry::mock();
        let term = render(&registry, 0, 0);

        for conn in registry.iter() {
            assert!(term.buffer_contains(&conn.name));
        }
        assert!(term.buffer_contains("192.168.1.100 · Ubuntu 22.04 · Uptime: 45d 12h"));
    }

    #[test]
    fn test_selected_marker() {
        let registry = Registry::mock();
        let term = render(&registry, 1, 0);

        // Second card starts at row 1 + ROW_HEIGHT
        assert!(term.line_contains(1 + ROW_HEIGHT, "Dev Machine"));
        assert!(term.line_contains(1 + ROW_HEIGHT, "[selected]"));
        assert!(!term.line_contains(1, "[selected]"));
    }

    #[test]
    fn test_high_readings_highlighted() {
        let mut conns = srvctl_core::mock::connections();
        conns[0].cpu = 91;
        conns[0].ram = 85;
        conns[0].status = ConnectionStatus::Online;
        let registry = Registry::new(conns).unwrap();
        let term = render(&registry, 0, 0);

        let row = 1;
        let col = term.find_in_line(row, " 91%").unwrap() + 1;
        assert_eq!(term.buffer()[(col, row)].fg, palette::STATUS_RED);

        // Dev Machine's 45% RAM is below the highlight threshold
        let row = 1 + ROW_HEIGHT;
        let col = term.find_in_line(row, " 45%").unwrap() + 1;
        assert_eq!(term.buffer()[(col, row)].fg, palette::TEXT_PRIMARY);
    }
}
