use super::EguiApp;
use super::style;
use crate::egui_app::state::PredictionOutcome;
use eframe::egui::{self, Color32, Frame, Margin, RichText};

impl EguiApp {
    /// Banner for a valid prediction; nothing for absent or out-of-range values.
    pub(super) fn render_prediction(&mut self, ui: &mut egui::Ui) {
        let Some(outcome) = self.controller.prediction_outcome() else {
            return;
        };
        let (fill, text_color) = match outcome {
            PredictionOutcome::Detected => (style::detected_fill(), Color32::WHITE),
            PredictionOutcome::NotDetected => {
                (style::not_detected_fill(), style::palette().text_primary)
            }
        };
        let tooltip = self
            .controller
            .ui
            .prediction
            .map(|value| format!("p = {value:.4}"))
            .unwrap_or_default();
        banner(ui, fill, |ui| {
            ui.label(
                RichText::new(outcome.message())
                    .size(20.0)
                    .strong()
                    .color(text_color),
            )
            .on_hover_text(tooltip);
        });
    }

    pub(super) fn render_error(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.controller.ui.error.clone() else {
            return;
        };
        ui.add_space(6.0);
        banner(ui, style::error_fill(), |ui| {
            ui.label(RichText::new(format!("Error: {error}")).color(Color32::WHITE));
        });
    }
}

fn banner(ui: &mut egui::Ui, fill: Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    Frame::new()
        .fill(fill)
        .stroke(style::card_stroke())
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(add_contents);
        });
}
