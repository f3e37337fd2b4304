//! Startup - settings resolution and initial state from CLI overrides

use std::path::Path;

use srvctl_app::config::{self, Settings};
use srvctl_app::{AppState, View};
use srvctl_core::prelude::*;
use srvctl_core::Registry;

/// Command-line overrides applied on top of the settings file
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Connection id to select instead of the first registry entry
    pub connection: Option<String>,
    /// View to open instead of `ui.initial_view`
    pub view: Option<View>,
}

/// Load settings from an explicit path (must exist and parse) or from the
/// default location (falls back to defaults)
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => config::load_settings_strict(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(config::load_settings(&config::default_config_path())),
    }
}

/// Build the initial state over the mock registry
pub fn build_state(settings: Settings, options: &StartupOptions) -> Result<AppState> {
    let mut state = AppState::with_settings(Registry::mock(), settings);

    if let Some(id) = options.connection.as_deref() {
        state.select_connection_by_id(id)?;
    }
    if let Some(view) = options.view {
        state.view = view;
    }

    debug!(
        view = %state.view,
        connection = %state.selected_connection().id,
        "Initial state ready"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_overrides() {
        let state = build_state(Settings::default(), &StartupOptions::default()).unwrap();

        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.selected_connection().id, "srv-01");
    }

    #[test]
    fn test_overrides_beat_settings() {
        let mut settings = Settings::default();
        settings.ui.initial_view = View::Logs;
        let options = StartupOptions {
            connection: Some("srv-03".into()),
            view: Some(View::Terminal),
        };
        let state = build_state(settings, &options).unwrap();

        assert_eq!(state.view, View::Terminal);
        assert_eq!(state.selected_connection().name, "Backup Node");
    }

    #[test]
    fn test_unknown_connection_is_an_error() {
        let options = StartupOptions {
            connection: Some("srv-99".into()),
            ..Default::default()
        };
        let err = build_state(Settings::default(), &options).unwrap_err();

        assert!(matches!(err, Error::UnknownConnection { .. }));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(matches!(
            resolve_settings(Some(&missing)),
            Err(Error::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_explicit_config_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ninitial_view = \"monitoring\"\n").unwrap();

        let settings = resolve_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.initial_view, View::Monitoring);
    }
}
