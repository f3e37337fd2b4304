//! Semantic style builders for the dashboard theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use srvctl_core::{ConnectionStatus, LoadLevel, Severity};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on accent" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

// --- Domain mappings ---

/// `(dot, label, style)` for a connection status pill
pub fn status_indicator(status: ConnectionStatus) -> (&'static str, &'static str, Style) {
    match status {
        ConnectionStatus::Online => (
            "●",
            status.label(),
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ConnectionStatus::Idle => ("●", status.label(), Style::default().fg(palette::STATUS_YELLOW)),
        ConnectionStatus::Offline => ("○", status.label(), Style::default().fg(palette::TEXT_MUTED)),
    }
}

/// Message color for an event log line
pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style::default().fg(palette::TEXT_PRIMARY),
        Severity::Success => Style::default().fg(palette::STATUS_GREEN),
        Severity::Warning => Style::default().fg(palette::STATUS_YELLOW),
        Severity::Error => Style::default().fg(palette::STATUS_RED),
    }
}

/// Badge color for an event log line's severity tag
pub fn severity_badge(severity: Severity) -> Style {
    severity_style(severity).add_modifier(Modifier::BOLD)
}

/// Gauge / percentage color for a load level
pub fn load_style(level: LoadLevel) -> Style {
    match level {
        LoadLevel::Normal => Style::default().fg(palette::STATUS_GREEN),
        LoadLevel::Elevated => Style::default().fg(palette::STATUS_YELLOW),
        LoadLevel::Critical => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}
