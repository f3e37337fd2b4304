//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use srvctl_app::{AppState, View};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state
/// except for widget state that tracks rendering info (scroll position).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let sidebar = widgets::Sidebar::new(
        state.view,
        state.registry.online_count(),
        state.registry.len(),
        icons,
    )
    .compact(areas.compact);
    frame.render_widget(sidebar, areas.sidebar);

    frame.render_widget(
        widgets::MainHeader::new(state.view, state.selected_connection()),
        areas.header,
    );

    let content = areas.content;
    match state.view {
        View::Dashboard => {
            let dashboard = widgets::Dashboard::new(&state.registry, &state.feed, icons)
                .preview(state.settings.feed.dashboard_preview);
            frame.render_widget(dashboard, content);
        }
        View::Terminal => {
            let panel = widgets::TerminalPanel::new(
                &state.registry.as_slice()[state.selected],
                state.feed.commands(),
                &state.command_input,
                icons,
            );
            frame.render_stateful_widget(panel, content, &mut state.terminal_scroll);
        }
        View::Connections => {
            let list = widgets::ConnectionList::new(
                &state.registry,
                state.selected,
                state.connection_cursor,
                icons,
            );
            frame.render_widget(list, content);
        }
        View::Logs => {
            let panel = widgets::LogPanel::new(&state.feed, state.log_filter, icons);
            frame.render_stateful_widget(panel, content, &mut state.log_scroll);
        }
        View::Monitoring => {
            frame.render_widget(widgets::Monitoring::new(&state.registry, icons), content);
        }
        View::History => {
            let panel = widgets::HistoryPanel::new(state.feed.commands(), icons);
            frame.render_stateful_widget(panel, content, &mut state.history_scroll);
        }
        View::Settings => {
            frame.render_widget(
                widgets::SettingsPanel::new(&state.settings_form, icons),
                content,
            );
        }
    }
}
