//! Command history view
//!
//! Every submitted command oldest first: input with host and time, then the
//! canned output indented beneath it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use srvctl_app::scroll_state::ScrollState;
use srvctl_app::View;
use srvctl_core::CommandEntry;

use super::scroll_window;
use crate::theme::{icons::IconSet, palette, styles};

pub struct HistoryPanel<'a> {
    commands: &'a [CommandEntry],
    icons: IconSet,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(commands: &'a [CommandEntry], icons: IconSet) -> Self {
        Self { commands, icons }
    }

    fn entry_lines(&self, cmd: &'a CommandEntry) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.view(View::Terminal)),
                Style::default().fg(palette::STATUS_GREEN),
            ),
            Span::styled(cmd.input.as_str(), styles::text_bright()),
            Span::raw("  "),
            Span::styled(cmd.host.as_str(), styles::text_secondary()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(cmd.time.as_str(), styles::text_muted()),
        ])];
        lines.extend(cmd.output.lines().map(|l| {
            Line::from(vec![
                Span::raw("    "),
                Span::styled(l, Style::default().fg(palette::TERMINAL_OUTPUT)),
            ])
        }));
        lines.push(Line::default());
        lines
    }
}

impl StatefulWidget for HistoryPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(" History ({}) ", self.commands.len());
        let block = styles::glass_block(true).title(Line::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.commands.is_empty() {
            state.update_content_size(0, inner.height as usize);
            Paragraph::new(Line::styled("No commands yet", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .commands
            .iter()
            .flat_map(|cmd| self.entry_lines(cmd))
            .collect();
        let lines = scroll_window(lines, inner, state);
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use srvctl_app::config::IconMode;
    use srvctl_core::mock;

    fn render(commands: &[CommandEntry], height: u16) -> (TestTerminal, ScrollState) {
        let mut term = TestTerminal::with_size(90, height);
        let mut scroll = ScrollState::new();
        term.render_stateful_widget(
            HistoryPanel::new(commands, IconSet::new(IconMode::Unicode)),
            term.area(),
            &mut scroll,
        );
        (term, scroll)
    }

    #[test]
    fn test_seed_history_rendered() {
        let commands = mock::commands();
        let (term, _) = render(&commands, 40);

        assert!(term.buffer_contains("History (2)"));
        assert!(term.buffer_contains("systemctl status nginx"));
        assert!(term.buffer_contains("df -h"));
        assert!(term.buffer_contains("srv-01"));
        assert!(term.buffer_contains("Filesystem      Size  Used Avail Use% Mounted on"));
    }

    #[test]
    fn test_oldest_first() {
        let commands = vec![
            CommandEntry::new("first", "a", "10:00:00", "srv-01"),
            CommandEntry::new("second", "b", "10:00:01", "srv-02"),
        ];
        let (term, _) = render(&commands, 20);

        assert!(term.line_contains(1, "first"));
        // input, one output line, spacer
        assert!(term.line_contains(4, "second"));
        assert!(term.line_contains(4, "srv-02 · 10:00:01"));
    }

    #[test]
    fn test_empty_history() {
        let (term, scroll) = render(&[], 10);
        assert!(term.buffer_contains("No commands yet"));
        assert_eq!(scroll.total_lines, 0);
    }

    #[test]
    fn test_long_history_follows_bottom() {
        let commands: Vec<CommandEntry> = (0..30)
            .map(|i| CommandEntry::new(format!("cmd-{i}"), "ok", "10:00:00", "srv-01"))
            .collect();
        let (term, scroll) = render(&commands, 12);

        assert!(term.buffer_contains("cmd-29"));
        assert!(!term.buffer_contains("cmd-0 "));
        assert_eq!(scroll.offset, scroll.total_lines - scroll.visible_lines);
    }
}
