mod backend_bridge;
mod controller;
mod ui;

use std::time::Instant;

use anyhow::{anyhow, Context};
use catalog::Catalog;
use clap::Parser;
use crossbeam_channel::bounded;
use kiosk_core::{load_settings, KioskSession};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::UiEvent;
use crate::ui::KioskApp;

/// Touchscreen totem for browsing capstone projects.
#[derive(Parser, Debug)]
#[command(name = "kiosk_gui", version)]
struct Args {
    /// Run in a resizable window instead of fullscreen.
    #[arg(long)]
    windowed: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings().context("failed to load kiosk settings")?;
    let catalog = Catalog::builtin();
    tracing::info!(
        projects = catalog.len(),
        idle_timeout = ?settings.idle_timeout,
        "starting kiosk"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(settings.assistant.clone(), catalog, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Capstone Hub")
            .with_inner_size([1080.0, 1920.0])
            .with_min_inner_size([720.0, 960.0])
            .with_fullscreen(!args.windowed),
        ..Default::default()
    };
    eframe::run_native(
        "Capstone Hub",
        options,
        Box::new(move |cc| {
            let session = KioskSession::new(catalog, &settings, Instant::now());
            Ok(Box::new(KioskApp::new(&cc.egui_ctx, session, cmd_tx, ui_rx)))
        }),
    )
    .map_err(|err| anyhow!("kiosk window failed: {err}"))
}
