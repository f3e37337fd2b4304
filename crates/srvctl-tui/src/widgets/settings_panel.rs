//! Settings form widget
//!
//! Renders the form sections as bordered cards with one row per field, and a
//! footer with the edit/save hints or the save acknowledgement.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use srvctl_app::settings_form::{FormField, SettingsFormState};

use crate::theme::{icons::IconSet, palette, styles};

/// Layout constants for field rows
const INDICATOR_WIDTH: u16 = 2;
const ICON_WIDTH: u16 = 3;
const LABEL_WIDTH: u16 = 16;

pub struct SettingsPanel<'a> {
    form: &'a SettingsFormState,
    icons: IconSet,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(form: &'a SettingsFormState, icons: IconSet) -> Self {
        Self { form, icons }
    }

    fn render_field(&self, field: &FormField, selected: bool, area: Rect, buf: &mut Buffer) {
        let (x, y, width) = (area.x, area.y, area.width);
        if area.is_empty() {
            return;
        }
        if selected {
            buf.set_style(
                Rect::new(x, y, width, 1),
                Style::default().bg(palette::SIDEBAR_BG),
            );
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("▎");
                cell.set_fg(palette::ACCENT);
            }
        }

        if width <= INDICATOR_WIDTH {
            return;
        }
        let mut col = x + INDICATOR_WIDTH;
        buf.set_stringn(
            col,
            y,
            self.icons.field(field.icon),
            (area.right() - col) as usize,
            styles::text_muted(),
        );
        col += ICON_WIDTH;
        if col >= area.right() {
            return;
        }

        let label_style = if selected {
            styles::text_primary().add_modifier(Modifier::BOLD)
        } else {
            styles::text_secondary()
        };
        buf.set_stringn(
            col,
            y,
            format!("{:<width$}", field.label, width = LABEL_WIDTH as usize),
            (area.right() - col) as usize,
            label_style,
        );
        col += LABEL_WIDTH;

        let remaining = width.saturating_sub(col - x) as usize;
        if remaining == 0 {
            return;
        }

        if selected && self.form.editing {
            let display = format!("{}▌", self.form.edit_buffer);
            buf.set_stringn(
                col,
                y,
                display,
                remaining,
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .bg(palette::BORDER_DIM),
            );
        } else {
            let (text, is_placeholder) = field.display_value();
            let style = if is_placeholder {
                styles::text_muted().add_modifier(Modifier::ITALIC)
            } else {
                styles::text_primary()
            };
            buf.set_stringn(col, y, text, remaining, style);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = if self.form.editing {
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" confirm    ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel", styles::text_muted()),
            ])
        } else if self.form.save_acknowledged {
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.check()),
                    Style::default().fg(palette::STATUS_GREEN),
                ),
                Span::styled(
                    "Settings saved (not persisted)",
                    Style::default().fg(palette::STATUS_GREEN),
                ),
            ])
        } else {
            let save_label = if self.form.dirty {
                " save settings*"
            } else {
                " save settings"
            };
            Line::from(vec![
                Span::styled("j/k", styles::keybinding()),
                Span::styled(" navigate    ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" edit    ", styles::text_muted()),
                Span::styled("s", styles::accent_bold()),
                Span::styled(save_label, styles::accent()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = self.form.sections();

        let mut constraints: Vec<Constraint> = sections
            .iter()
            // Borders plus one row per field
            .map(|(_, fields)| Constraint::Length(fields.len() as u16 + 2))
            .collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));

        let areas = Layout::vertical(constraints).spacing(1).split(area);

        for ((section, fields), card_area) in sections.iter().zip(areas.iter()) {
            let block = styles::glass_block(false).title(Line::styled(
                format!(" {} ", section.title()),
                styles::text_bright(),
            ));
            let inner = block.inner(*card_area);
            block.render(*card_area, buf);

            for (row, (index, field)) in fields.iter().enumerate() {
                let y = inner.y + row as u16;
                if y >= inner.bottom() {
                    break;
                }
                let selected = *index == self.form.selected_index;
                self.render_field(field, selected, Rect::new(inner.x, y, inner.width, 1), buf);
            }
        }

        if let Some(footer) = areas.get(sections.len()).filter(|a| !a.is_empty()) {
            self.render_footer(*footer, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use srvctl_app::config::IconMode;

    fn render(form: &SettingsFormState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 20);
        term.render_widget(
            SettingsPanel::new(form, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_sections_and_placeholders() {
        let form = SettingsFormState::new();
        let term = render(&form);

        assert!(term.buffer_contains("Connection"));
        assert!(term.buffer_contains("Notifications"));
        assert!(term.buffer_contains("Agent address"));
        assert!(term.buffer_contains("https://agent.example.com"));
        assert!(term.buffer_contains("sk-xxxx-xxxx-xxxx"));
        assert!(term.buffer_contains("admin@example.com"));
    }

    #[test]
    fn test_selected_row_has_accent_bar() {
        let form = SettingsFormState::new();
        let term = render(&form);

        // First card: border row 0, first field row 1, inner x 1
        assert_eq!(term.buffer()[(1, 1)].symbol(), "▎");
        assert_eq!(term.buffer()[(1, 2)].symbol(), " ");
    }

    #[test]
    fn test_editing_shows_buffer() {
        let mut form = SettingsFormState::new();
        form.start_editing();
        form.push_char('x');
        form.push_char('y');
        let term = render(&form);

        assert!(term.buffer_contains("xy▌"));
        assert!(term.buffer_contains("Esc cancel"));
    }

    #[test]
    fn test_secret_value_masked() {
        let mut form = SettingsFormState::new();
        form.select_next();
        form.select_next();
        form.start_editing();
        for c in "abcd".chars() {
            form.push_char(c);
        }
        form.commit_edit();
        let term = render(&form);

        assert!(term.buffer_contains("••••"));
        assert!(!term.buffer_contains("abcd"));
        assert!(term.buffer_contains("save settings*"));
    }

    #[test]
    fn test_renders_in_cramped_areas() {
        let mut form = SettingsFormState::new();
        form.start_editing();
        for (width, height) in [(200, 2), (1, 1), (10, 3), (3, 12), (24, 1)] {
            let mut term = TestTerminal::with_size(width, height);
            term.render_widget(
                SettingsPanel::new(&form, IconSet::new(IconMode::Unicode)),
                term.area(),
            );
            assert_eq!(term.area(), Rect::new(0, 0, width, height));
        }
    }

    #[test]
    fn test_save_acknowledgement() {
        let mut form = SettingsFormState::new();
        form.acknowledge_save();
        let term = render(&form);

        assert!(term.buffer_contains("Settings saved (not persisted)"));
    }
}
