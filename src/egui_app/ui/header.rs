use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText};

const TITLE: &str = "Higgs Boson Detector";
const AUTHOR: &str = "Martin Alejandro Castro Alvarez";
pub(super) const GITHUB_URL: &str =
    "https://github.com/MartinCastroAlvarez/higgs-boson-machine-learning";
const PAPER_URL: &str =
    "https://github.com/MartinCastroAlvarez/higgs-boson-machine-learning/blob/main/PaperEN.pdf";

impl EguiApp {
    pub(super) fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(TITLE)
                    .size(28.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(RichText::new(AUTHOR).color(palette.text_muted));
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                external_link(ui, "GitHub", GITHUB_URL);
                if self.controller.ui.is_connected() {
                    ui.add_space(12.0);
                    external_link(ui, "Paper", PAPER_URL);
                }
            });
        });
    }
}

/// A link that opens `url` in the system browser.
pub(super) fn external_link(ui: &mut egui::Ui, text: &str, url: &str) {
    if ui.link(text).on_hover_text(url).clicked() {
        if let Err(err) = open::that(url) {
            tracing::warn!(%url, error = %err, "Could not open link");
        }
    }
}
