use super::EguiApp;
use super::style;
use crate::backend::SchemaField;
use crate::egui_app::view_model;
use eframe::egui::{self, RichText, SliderClamping};

const COLUMN_SPACING: f32 = 14.0;
const ROW_SPACING: f32 = 16.0;
const MIN_FIELD_WIDTH: f32 = 140.0;
const INPUT_HEIGHT: f32 = 22.0;

impl EguiApp {
    /// One numeric input + slider pair per schema field, in schema order.
    pub(super) fn render_features(&mut self, ui: &mut egui::Ui) {
        let Some(fields) = self
            .controller
            .ui
            .schema
            .as_ref()
            .map(|schema| schema.fields().to_vec())
        else {
            return;
        };
        if fields.is_empty() {
            ui.label(
                RichText::new("The backend reported no input fields.")
                    .color(style::palette().text_muted),
            );
            return;
        }
        let available = ui.available_width();
        let columns = view_model::feature_columns(available);
        let gaps = COLUMN_SPACING * (columns as f32 - 1.0);
        let field_width = ((available - gaps) / columns as f32).max(MIN_FIELD_WIDTH);
        egui::Grid::new("feature_grid")
            .num_columns(columns)
            .spacing([COLUMN_SPACING, ROW_SPACING])
            .show(ui, |ui| {
                for (index, field) in fields.iter().enumerate() {
                    self.render_feature(ui, field, field_width);
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_feature(&mut self, ui: &mut egui::Ui, field: &SchemaField, width: f32) {
        let Some(mut value) = self.controller.feature_value(&field.name) else {
            return;
        };
        let range = field.range;
        let palette = style::palette();
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.label(RichText::new(view_model::field_label(&field.name)).color(palette.text_primary))
                .on_hover_text(field_hint(field));

            let speed = ((range.max - range.min) / 1000.0).max(1e-4);
            let input = egui::DragValue::new(&mut value)
                .range(range.min..=range.max)
                .fixed_decimals(view_model::FEATURE_DECIMALS)
                .speed(speed);
            let typed = ui.add_sized([width, INPUT_HEIGHT], input).changed();

            ui.spacing_mut().slider_width = width;
            let slider = egui::Slider::new(&mut value, range.min..=range.max)
                .show_value(false)
                .clamping(SliderClamping::Always);
            let slid = ui.add(slider).changed();

            if typed || slid {
                self.controller.set_feature(&field.name, value);
            }
        });
    }
}

fn field_hint(field: &SchemaField) -> String {
    let range = &field.range;
    let mut hint = format!(
        "{}\nmin {}  max {}  mean {}",
        field.name,
        view_model::format_feature_value(range.min),
        view_model::format_feature_value(range.max),
        view_model::format_feature_value(range.mean),
    );
    if let Some(std) = range.std {
        hint.push_str(&format!("  std {}", view_model::format_feature_value(std)));
    }
    hint
}
