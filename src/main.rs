// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod client;
mod config;
mod model;
mod state;
mod ui;

use app::CareerGapApp;
use client::AnalyzeClient;
use config::Settings;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Gap Analyzer v{}", env!("CARGO_PKG_VERSION"));
    info!("Analysis service: {}", settings.api_base_url);

    let client = AnalyzeClient::new(&settings.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_title("Career Gap Analyzer"),
        ..Default::default()
    };

    eframe::run_native(
        "Career Gap Analyzer",
        options,
        Box::new(move |_cc| Box::new(CareerGapApp::new(client))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
