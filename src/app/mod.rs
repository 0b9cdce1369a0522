//! Application layer - state management and orchestration

pub mod handler;
pub mod message;
pub mod settings_form;
pub mod signals;
pub mod state;
pub mod wizard;

// Re-export handler types for event loop integration
pub use handler::{UpdateAction, UpdateResult};
pub use state::AppState;

use crate::common::prelude::*;
use crate::config::Settings;
use crate::tui;

/// Main application entry point
pub async fn run(settings: Settings) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Minetop starting");
    info!("Backend command: {}", settings.backend.command);
    info!("═══════════════════════════════════════════════════════");

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Minetop exiting");
    result
}
