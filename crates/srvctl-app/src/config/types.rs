//! Configuration types for Server Control
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

use crate::view::View;

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub feed: FeedSettings,

    #[serde(default)]
    pub terminal: TerminalSettings,
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// View shown at startup
    #[serde(default)]
    pub initial_view: View,
}

/// Session feed settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedSettings {
    /// Start with the mock event log and command history
    #[serde(default = "default_true")]
    pub seed_mock_data: bool,

    /// Number of log entries in the dashboard "Recent events" card
    #[serde(default = "default_dashboard_preview")]
    pub dashboard_preview: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            seed_mock_data: true,
            dashboard_preview: default_dashboard_preview(),
        }
    }
}

/// Terminal view settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TerminalSettings {
    /// Jump to the newest output after each submission
    #[serde(default = "default_true")]
    pub auto_scroll: bool,
}

impl Default for TerminalSettings {
    fn default() -> Self {
        Self { auto_scroll: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_dashboard_preview() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.initial_view, View::Dashboard);
        assert!(settings.feed.seed_mock_data);
        assert_eq!(settings.feed.dashboard_preview, 6);
        assert!(settings.terminal.auto_scroll);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            initial_view = "monitoring"
            "#,
        )
        .unwrap();

        assert_eq!(settings.ui.initial_view, View::Monitoring);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.feed.dashboard_preview, 6);
    }

    #[test]
    fn test_icon_mode_snake_case() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
