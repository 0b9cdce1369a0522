//! Core domain types - pure business logic with no UI dependencies

pub mod config;
pub mod log_buffer;
pub mod status;
pub mod types;

pub use config::{MinerConfig, P2poolChain, Pool, XmrigConfig};
pub use log_buffer::{LogBuffer, DEFAULT_LOG_CAP};
pub use status::{format_hashrate, Hashrate, HashrateDisplay, StatusSummary};
pub use types::{AppPhase, DonateTab, MiningState, Page, ProcessKind};
