//! Configuration file parsing for Server Control
//!
//! Supports:
//! - `<config_dir>/server-control/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_strict};
pub use types::*;
