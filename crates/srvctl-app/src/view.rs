//! Views selectable from the sidebar

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use srvctl_core::Error;

/// The panel currently shown in the main content area.
///
/// Every view can be reached from every other view; there is no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Terminal,
    Connections,
    Logs,
    Monitoring,
    History,
    Settings,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Terminal,
        View::Connections,
        View::Logs,
        View::Monitoring,
        View::History,
        View::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Terminal => "Terminal",
            View::Connections => "Connections",
            View::Logs => "Logs",
            View::Monitoring => "Monitoring",
            View::History => "History",
            View::Settings => "Settings",
        }
    }

    /// Position in the sidebar (0-based)
    pub fn index(&self) -> usize {
        View::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        View::ALL.get(index).copied()
    }

    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_view(s))
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
