//! TUI presentation layer
//!
//! Organized into focused submodules:
//!
//! - `runner`: Entry point and event loop
//! - `process`: Message processing with follow-up chasing
//! - `actions`: Action dispatch and background task execution
//! - `event`: Terminal event handling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Terminal setup/restore
//! - `widgets`: Reusable UI components

pub mod actions;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

pub use runner::run;
