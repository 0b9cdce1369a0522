//! Minetop Library
//!
//! A terminal control panel for Monero mining: drives a supervisor
//! process that runs monerod, P2Pool, and XMRig, and renders their
//! state and output.

// Module declarations
pub mod app;
pub mod backend;
pub mod common;
pub mod config;
pub mod core;
pub mod tui;

// Re-export main entry point
pub use app::run;
