//! Marknote Desktop Application
//!
//! A markdown notes workspace with account registration.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod components;
mod routes;
mod state;
mod views;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use marknote_core::config::AppConfig;

use cli::Args;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marknote=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let config = match config_from_env().and_then(|base| args.resolve_config(base)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!("Starting Marknote with notes in {}", config.data_dir.display());

    let window = WindowBuilder::new().with_title("Marknote");

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);
}

/// Per-user data directory used when none is configured
fn default_data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("marknote")
}

/// Resolve configuration from the environment, falling back to defaults
fn config_from_env() -> marknote_core::Result<AppConfig> {
    AppConfig::from_env(default_data_dir())
}
