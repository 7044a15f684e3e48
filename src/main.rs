//! OSO GUI
//!
//! A graphical interface for playing OSO against the computer or another player.

use std::path::Path;

use anyhow::Context;
use oso::config::{AppConfig, DEFAULT_CONFIG_FILE};
use oso::ui::OsoApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
        .context("failed to load configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("OSO"),
        ..Default::default()
    };

    eframe::run_native(
        "OSO",
        options,
        Box::new(move |cc| Ok(Box::new(OsoApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the GUI: {e}"))
}
