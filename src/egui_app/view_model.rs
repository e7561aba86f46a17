//! Helpers to convert controller state into display values.

use crate::egui_app::state::PredictionOutcome;

/// Field labels are cut to this many characters to keep the grid aligned.
pub const MAX_LABEL_CHARS: usize = 20;
/// Digits after the decimal point in numeric feature inputs.
pub const FEATURE_DECIMALS: usize = 4;
const MIN_COLUMN_WIDTH: f32 = 200.0;
const MAX_COLUMNS: usize = 4;

/// Truncate a field name for its label.
pub fn field_label(name: &str) -> &str {
    match name.char_indices().nth(MAX_LABEL_CHARS) {
        Some((index, _)) => &name[..index],
        None => name,
    }
}

/// Text shown in a feature's numeric input.
pub fn format_feature_value(value: f64) -> String {
    format!("{:.*}", FEATURE_DECIMALS, value)
}

/// Outcome for a prediction, or `None` when there is nothing valid to show.
///
/// Values outside `[0, 1]` (and NaN) are treated as absent.
pub fn prediction_outcome(prediction: Option<f64>, threshold: f64) -> Option<PredictionOutcome> {
    let value = prediction.filter(|value| (0.0..=1.0).contains(value))?;
    Some(if value > threshold {
        PredictionOutcome::Detected
    } else {
        PredictionOutcome::NotDetected
    })
}

/// Whole-percent label value for a threshold in `[0, 1]`.
pub fn threshold_percent(threshold: f64) -> i64 {
    (threshold * 100.0).round() as i64
}

/// Number of feature columns that fit in `available_width`.
pub fn feature_columns(available_width: f32) -> usize {
    ((available_width / MIN_COLUMN_WIDTH).floor() as usize).clamp(1, MAX_COLUMNS)
}
