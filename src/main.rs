// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod app;
mod config;
mod form;
mod render;
mod state;
mod ui;

use api::ApiClient;
use app::HealthApp;
use config::Settings;

fn main() -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;
    init_tracing(&settings)?;
    tracing::info!(api_base_url = %settings.api_base_url, "starting Health Predict");

    // Requests run here; the UI thread only polls for their outcome
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("health-predict-io")
        .build()
        .context("Failed to start async runtime")?;
    let client = ApiClient::new(&settings).context("Failed to build API client")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Health Predict"),
        ..Default::default()
    };

    eframe::run_native(
        "Health Predict",
        options,
        Box::new(move |_cc| Box::new(HealthApp::new(client, handle))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

fn init_tracing(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialise logging")?;
    Ok(())
}
