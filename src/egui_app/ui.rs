//! egui renderer for the detector form.

mod connecting;
mod controls;
mod features;
mod header;
mod result;
pub mod style;

use std::time::Duration;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin};

/// Minimum window size that still fits one feature column and the controls.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [420.0, 480.0];
const MAX_CONTENT_WIDTH: f32 = 900.0;
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

/// Renders the detector UI from the controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Wrap a controller and start the initial schema request.
    pub fn new(mut controller: EguiController) -> Self {
        controller.connect();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_body(&mut self, ui: &mut egui::Ui) {
        self.render_header(ui);
        ui.add_space(12.0);
        if !self.controller.ui.is_connected() {
            self.render_connecting(ui);
            return;
        }
        self.render_features(ui);
        ui.add_space(12.0);
        self.render_predict_button(ui);
        ui.add_space(8.0);
        self.render_threshold(ui);
        ui.add_space(8.0);
        self.render_prediction(ui);
        self.render_error(ui);
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();

        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let side = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(0.0);
                        ui.horizontal_top(|ui| {
                            ui.add_space(side);
                            ui.vertical(|ui| {
                                ui.set_max_width(MAX_CONTENT_WIDTH);
                                self.render_body(ui);
                            });
                        });
                    });
            });

        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
