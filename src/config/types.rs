//! UI settings types
//!
//! These are Minetop's own knobs, distinct from the backend-owned
//! mining configuration (`core::MinerConfig`).

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml` in the minetop config dir)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub status: StatusSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// How to reach the mining supervisor
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Command used to spawn the backend process
    #[serde(default = "default_backend_command")]
    pub command: String,

    /// Extra arguments passed to the backend
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            command: default_backend_command(),
            args: Vec::new(),
        }
    }
}

fn default_backend_command() -> String {
    "minetopd".to_string()
}

/// Status polling cadence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusSettings {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_poll_interval() -> u64 {
    10
}

/// Display knobs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Per-process log line cap
    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

fn default_log_buffer_size() -> usize {
    crate::core::DEFAULT_LOG_CAP
}
