//! Minetop - a terminal control panel for Monero mining
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use minetop::common::prelude::*;
use minetop::config;

/// Minetop - a terminal control panel for Monero mining
#[derive(Parser, Debug)]
#[command(name = "minetop")]
#[command(about = "A terminal control panel for Monero mining", long_about = None)]
struct Args {
    /// Config directory (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Backend command, overriding the configured one
    #[arg(long, value_name = "CMD")]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(config::default_config_dir);

    config::init_config_dir(&config_dir)?;
    let mut settings = config::load_settings(&config_dir);
    if let Some(command) = args.backend {
        settings.backend.command = command;
    }

    minetop::run(settings).await
}
