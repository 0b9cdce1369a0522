//! Reusable UI components

pub mod donate;
pub mod drawer;
pub mod header;
pub mod home;
pub mod log_view;
pub mod settings;
pub mod status_bar;
pub mod tabs;
pub mod wizard;

pub use donate::DonatePage;
pub use drawer::Drawer;
pub use header::Header;
pub use home::HomePage;
pub use log_view::{LogView, LogViewState};
pub use settings::SettingsPage;
pub use status_bar::StatusBar;
pub use tabs::ProcessTabs;
pub use wizard::WizardPage;
