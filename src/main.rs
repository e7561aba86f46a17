#![deny(missing_docs)]

//! Entry point for the Higgs boson detector UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use boson_detector::backend::HttpBackend;
use boson_detector::config;
use boson_detector::egui_app::controller::EguiController;
use boson_detector::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use boson_detector::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 720.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Higgs Boson Detector",
        native_options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = match config::load() {
                Ok(cfg) => {
                    tracing::info!(api = %cfg.api_base_url, "Configuration loaded");
                    let backend = Arc::new(HttpBackend::new(&cfg));
                    Box::new(EguiApp::new(EguiController::new(cfg, backend)))
                }
                Err(err) => {
                    tracing::error!(error = %err, "Failed to load configuration");
                    Box::new(LaunchError {
                        message: err.to_string(),
                    })
                }
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
