//! Main application entry point.
//!
//! Reads the startup configuration, then hands control to eframe
//! (winit/wgpu/egui). HudApp from src/ui/app.rs is the application.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use hudflash::config::{ConfigOverrides, OverlayConfig};
use hudflash::ui::HudApp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the vignette (overrides the config file)
    #[arg(long)]
    vignette: Option<bool>,

    /// Draw the screen-edge border (overrides the config file)
    #[arg(long)]
    border: Option<bool>,

    /// Border color code, e.g. #ff8800ff (overrides the config file)
    #[arg(long)]
    border_color: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let overrides = ConfigOverrides {
        vignette_enabled: args.vignette,
        border_enabled: args.border,
        border_color: args.border_color,
    };
    let config = OverlayConfig::load(args.config.as_deref(), &overrides)
        .context("Failed to load overlay configuration")?;
    log::info!("Starting hudflash with {:?}", config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flash HUD")
            .with_inner_size([1280.0, 720.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "hudflash",
        native_options,
        Box::new(move |cc| Ok(Box::new(HudApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
