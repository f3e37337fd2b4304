//! Monitoring view: a resource card per reachable connection.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};
use srvctl_core::{Connection, Registry};

use crate::theme::{icons::IconSet, palette, styles};

/// Border, header row, label row, gauge row, border
const CARD_HEIGHT: u16 = 5;

pub struct Monitoring<'a> {
    registry: &'a Registry,
    icons: IconSet,
}

impl<'a> Monitoring<'a> {
    pub fn new(registry: &'a Registry, icons: IconSet) -> Self {
        Self { registry, icons }
    }

    fn render_card(&self, conn: &Connection, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 {
            return;
        }

        let (dot, _, dot_style) = styles::status_indicator(conn.status);
        let header = Line::from(vec![
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(conn.name.as_str(), styles::text_bright()),
            Span::raw("  "),
            Span::styled(conn.ip.as_str(), styles::text_muted()),
        ]);
        buf.set_line(inner.x, inner.y, &header, inner.width);

        let uptime = Line::from(vec![
            Span::styled(format!("{} ", self.icons.clock()), styles::text_muted()),
            Span::styled(format!("Uptime: {}", conn.uptime), styles::text_muted()),
        ]);
        let uptime_width = uptime.width() as u16;
        if header.width() as u16 + uptime_width < inner.width {
            buf.set_line(inner.right() - uptime_width, inner.y, &uptime, uptime_width);
        }

        let meters = Rect::new(inner.x, inner.y + 1, inner.width, 2);
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(2)
            .split(meters);

        let disk = conn.disk_percent();
        let readings = [
            (self.icons.cpu(), "CPU", conn.cpu, styles::load_style(conn.cpu_level())),
            (self.icons.memory(), "RAM", conn.ram, styles::load_style(conn.ram_level())),
            (
                self.icons.disk(),
                "Disk",
                disk,
                Style::default().fg(palette::STATUS_BLUE),
            ),
        ];

        for ((icon, label, percent, style), column) in readings.into_iter().zip(columns.iter()) {
            render_meter(icon, label, percent, style, *column, buf);
        }
    }
}

fn render_meter(
    icon: &str,
    label: &str,
    percent: u8,
    style: Style,
    area: Rect,
    buf: &mut Buffer,
) {
    let value = format!("{percent}%");
    let label_line = Line::from(vec![
        Span::styled(format!("{icon} {label}"), styles::text_muted()),
    ]);
    buf.set_line(area.x, area.y, &label_line, area.width);

    let value_width = value.chars().count() as u16;
    if value_width < area.width {
        buf.set_line(
            area.right() - value_width,
            area.y,
            &Line::styled(value, styles::text_primary()),
            value_width,
        );
    }

    let gauge_area = Rect::new(area.x, area.y + 1, area.width, 1);
    let ratio = (f64::from(percent) / 100.0).clamp(0.0, 1.0);
    Gauge::default()
        .ratio(ratio)
        .gauge_style(style.bg(palette::GAUGE_TRACK))
        .label("")
        .render(gauge_area, buf);
}

impl Widget for Monitoring<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hosts: Vec<&Connection> = self.registry.reachable().collect();
        if hosts.is_empty() {
            Paragraph::new(Line::styled(
                format!("{} No reachable connections", self.icons.alert()),
                styles::text_muted(),
            ))
            .render(area, buf);
            return;
        }

        for (i, conn) in hosts.into_iter().enumerate() {
            let y = area.y + i as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.bottom() {
                break;
            }
            self.render_card(conn, Rect::new(area.x, y, area.width, CARD_HEIGHT), buf);
        }
    }
}
