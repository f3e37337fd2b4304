//! Terminal view: target selector, scrollback of submitted commands, and the
//! command line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use srvctl_app::scroll_state::ScrollState;
use srvctl_core::{CommandEntry, Connection};

use super::{header::VERSION_BADGE, scroll_window};
use crate::theme::{icons::IconSet, palette, styles};

const INPUT_PLACEHOLDER: &str = "Enter a command...";

pub struct TerminalPanel<'a> {
    connection: &'a Connection,
    commands: &'a [CommandEntry],
    input: &'a str,
    icons: IconSet,
}

impl<'a> TerminalPanel<'a> {
    pub fn new(
        connection: &'a Connection,
        commands: &'a [CommandEntry],
        input: &'a str,
        icons: IconSet,
    ) -> Self {
        Self {
            connection,
            commands,
            input,
            icons,
        }
    }

    fn prompt(host: &str) -> Vec<Span<'_>> {
        vec![
            Span::styled(format!("root@{host}"), Style::default().fg(palette::PROMPT_USER)),
            Span::styled(":", styles::text_muted()),
            Span::styled("~", Style::default().fg(palette::PROMPT_PATH)),
            Span::styled("$ ", styles::text_muted()),
        ]
    }

    fn selector_line(&self) -> Line<'a> {
        let (badge, badge_style) = if self.connection.status.is_online() {
            ("Connected", Style::default().fg(palette::STATUS_GREEN))
        } else {
            ("Idle", Style::default().fg(palette::STATUS_YELLOW))
        };

        Line::from(vec![
            Span::styled(" Target ", styles::text_secondary()),
            Span::styled("‹ ", styles::text_muted()),
            Span::styled(self.connection.selector_label(), styles::text_primary()),
            Span::styled(" ›", styles::text_muted()),
            Span::raw("  "),
            Span::styled(format!("[{badge}]"), badge_style.add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch target", styles::text_muted()),
        ])
    }

    fn scrollback(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::styled(
            format!(
                "ServerControl Terminal {VERSION_BADGE} - Connected to {}",
                self.connection.ip
            ),
            styles::text_muted(),
        )];

        for cmd in self.commands {
            let mut prompt = Self::prompt(&cmd.host);
            prompt.push(Span::styled(cmd.input.as_str(), styles::text_primary()));
            lines.push(Line::from(prompt));
            lines.extend(
                cmd.output
                    .lines()
                    .map(|l| Line::styled(l, Style::default().fg(palette::TERMINAL_OUTPUT))),
            );
        }

        let mut live = Self::prompt(&self.connection.id);
        live.push(Span::styled("█", styles::accent()));
        lines.push(Line::from(live));
        lines
    }

    fn input_line(&self) -> Line<'a> {
        let chevron = Span::styled(format!(" {} ", self.icons.chevron_right()), styles::accent());
        if self.input.is_empty() {
            Line::from(vec![
                chevron,
                Span::styled(INPUT_PLACEHOLDER, styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                chevron,
                Span::styled(self.input, styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ])
        }
    }
}

impl StatefulWidget for TerminalPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [selector, window] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);

        buf.set_line(selector.x, selector.y, &self.selector_line(), selector.width);

        let title = format!(" root@{} - bash ", self.connection.hostname());
        let block = styles::glass_block(true).title(Line::styled(title, styles::text_secondary()));
        let inner = block.inner(window);
        block.render(window, buf);

        if inner.height < 2 {
            return;
        }

        let [output, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        let lines = scroll_window(self.scrollback(), output, state);
        Paragraph::new(lines).render(output, buf);

        let input_block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());
        let input_inner = input_block.inner(input);
        input_block.render(input, buf);
        buf.set_line(input_inner.x, input_inner.y, &self.input_line(), input_inner.width);
    }
}
