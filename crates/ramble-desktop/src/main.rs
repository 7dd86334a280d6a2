//! Ramble Desktop Application
//!
//! Tap the mic, ramble, and keep the gist as a note.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use ramble_core::config::{load_settings, settings_path};
use ramble_core::models::Settings;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ramble=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Ramble...");

    let settings = load_user_settings();

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Voice Notes")
            .with_inner_size(LogicalSize::new(1100.0, 760.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(settings)
        .launch(app::App);
}

/// Read the settings file, falling back to defaults on any problem
fn load_user_settings() -> Settings {
    let Some(config_dir) = dirs::config_dir() else {
        tracing::warn!("No config directory on this platform, using default settings");
        return Settings::default();
    };
    let path = settings_path(&config_dir);
    match load_settings(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}
