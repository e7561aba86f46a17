use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText, SliderClamping};

const PREDICT_BUTTON_SIZE: [f32; 2] = [160.0, 34.0];

impl EguiApp {
    /// Predict button. While loading it shows a spinner and clicks do nothing.
    pub(super) fn render_predict_button(&mut self, ui: &mut egui::Ui) {
        let loading = self.controller.ui.loading;
        ui.vertical_centered(|ui| {
            let label = if loading {
                RichText::new("")
            } else {
                RichText::new("Predict").size(16.0).strong()
            };
            let response = ui.add_sized(PREDICT_BUTTON_SIZE, egui::Button::new(label));
            if loading {
                let spinner_rect =
                    egui::Rect::from_center_size(response.rect.center(), egui::vec2(18.0, 18.0));
                egui::Spinner::new().paint_at(ui, spinner_rect);
            }
            if response.clicked() {
                self.controller.on_predict_clicked();
            }
        });
    }

    /// Confidence slider in whole percent.
    pub(super) fn render_threshold(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut percent = self.controller.threshold_percent();
        ui.horizontal(|ui| {
            let label_width = 140.0;
            ui.spacing_mut().slider_width = (ui.available_width() - label_width).max(120.0);
            let slider = egui::Slider::new(&mut percent, 0..=100)
                .show_value(false)
                .clamping(SliderClamping::Always);
            if ui.add(slider).changed() {
                self.controller.set_threshold_percent(percent);
            }
            ui.label(
                RichText::new(format!("{percent}% Confidence")).color(palette.text_primary),
            );
        });
    }
}
