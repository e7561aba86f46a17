use super::EguiApp;
use super::header::external_link;
use super::style;
use eframe::egui::{self, RichText};

impl EguiApp {
    /// Shown until the schema loads. Only a manual reconnect leaves this screen
    /// after a failure.
    pub(super) fn render_connecting(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let connection = self.controller.ui.connection.clone();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Trying to connect with the backend...").size(16.0));
            ui.add_space(6.0);
            external_link(ui, &connection.schema_url, &connection.schema_url);
            ui.add_space(10.0);
            if connection.connecting {
                ui.add(egui::Spinner::new().size(18.0));
                return;
            }
            if let Some(detail) = connection.last_failure.as_deref() {
                ui.label(
                    RichText::new("The backend did not answer.").color(palette.text_muted),
                )
                .on_hover_text(detail);
                ui.add_space(6.0);
                if ui.button("Reconnect").clicked() {
                    self.controller.reconnect();
                }
            }
        });
    }
}
