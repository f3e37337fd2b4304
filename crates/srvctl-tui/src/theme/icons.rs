//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use srvctl_app::config::IconMode;
use srvctl_app::settings_form::FieldIcon;
use srvctl_app::View;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    fn pick(&self, nerd: &'static str, unicode: &'static str) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd,
            IconMode::Unicode => unicode,
        }
    }

    /// App logo in the sidebar
    pub fn logo(&self) -> &'static str {
        self.pick("\u{f233}", "\u{25a3}") // nf-fa-server / ▣
    }

    /// Sidebar entry icon for a view
    pub fn view(&self, view: View) -> &'static str {
        match view {
            View::Dashboard => self.pick("\u{f009}", "\u{25a6}"), // nf-fa-th_large / ▦
            View::Terminal => self.pick("\u{f120}", "\u{276f}"),  // nf-fa-terminal / ❯
            View::Connections => self.pick("\u{f0e8}", "\u{2261}"), // nf-fa-sitemap / ≡
            View::Logs => self.pick("\u{f15c}", "\u{2630}"),      // nf-fa-file_text / ☰
            View::Monitoring => self.pick("\u{f0f1}", "~"),       // nf-fa-heartbeat
            View::History => self.pick("\u{f1da}", "\u{21ba}"),   // nf-fa-history / ↺
            View::Settings => self.pick("\u{f013}", "\u{2699}"),  // nf-fa-cog / ⚙
        }
    }

    /// Settings form field icon
    pub fn field(&self, icon: FieldIcon) -> &'static str {
        match icon {
            FieldIcon::Globe => self.pick("\u{f0ac}", "@"),
            FieldIcon::Hash => self.pick("\u{f292}", "#"),
            FieldIcon::Key => self.pick("\u{f084}", "*"),
            FieldIcon::Bell => self.pick("\u{f0f3}", "!"),
            FieldIcon::Mail => self.pick("\u{f0e0}", "\u{2709}"), // ✉
        }
    }

    pub fn dot(&self) -> &'static str {
        self.pick("\u{f444}", "\u{25cf}") // nf-oct-dot_fill / ●
    }

    pub fn cpu(&self) -> &'static str {
        self.pick("\u{f2db}", "[C]")
    }

    pub fn memory(&self) -> &'static str {
        self.pick("\u{efc5}", "[M]")
    }

    pub fn disk(&self) -> &'static str {
        self.pick("\u{f0a0}", "[D]")
    }

    pub fn alert(&self) -> &'static str {
        self.pick("\u{f071}", "\u{26a0}") // ⚠
    }

    pub fn check(&self) -> &'static str {
        self.pick("\u{f00c}", "\u{2713}") // ✓
    }

    pub fn chevron_right(&self) -> &'static str {
        self.pick("\u{f054}", "\u{203a}") // ›
    }

    pub fn clock(&self) -> &'static str {
        self.pick("\u{f017}", "\u{25f7}") // ◷
    }
}
