//! Configuration file parsing for Minetop
//!
//! Covers the UI's own `config.toml`. The mining configuration itself
//! lives behind the backend bridge (`get_config` / `save_settings`).

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use types::{BackendSettings, Settings, StatusSettings, UiSettings};
