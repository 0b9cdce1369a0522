//! Settings parser for the minetop config directory

use std::path::{Path, PathBuf};

use super::types::Settings;
use crate::common::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

/// Default configuration directory (`~/.config/minetop` on Unix)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("minetop")
}

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file if none exists
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Minetop configuration

[backend]
command = "minetopd"    # Mining supervisor binary
args = []

[status]
poll_interval_secs = 10

[ui]
log_buffer_size = 1000  # Lines kept per process log panel
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.backend.command, "minetopd");
        assert_eq!(settings.status.poll_interval_secs, 10);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[backend]
command = "/opt/minetopd"

[ui]
log_buffer_size = 500
"#;
        std::fs::write(temp.path().join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.backend.command, "/opt/minetopd");
        assert_eq!(settings.ui.log_buffer_size, 500);
        assert_eq!(settings.status.poll_interval_secs, 10);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.backend.command, "minetopd");
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("minetop");

        init_config_dir(&dir).unwrap();

        let content = std::fs::read_to_string(dir.join("config.toml")).unwrap();
        let _: Settings = toml::from_str(&content).expect("default config should be valid TOML");
    }

    #[test]
    fn test_init_config_dir_idempotent() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "[status]\npoll_interval_secs = 2\n").unwrap();

        // Second init must not overwrite
        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("poll_interval_secs = 2"));
    }
}
