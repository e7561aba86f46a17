//! Owns all application state and bridges the backend to the egui UI.

mod connection;
pub(crate) mod jobs;
mod prediction;

#[cfg(test)]
mod test_support;

use crate::backend::PredictionBackend;
use crate::config::AppConfig;
use crate::egui_app::state::*;
use crate::egui_app::view_model;
use jobs::{ControllerJobs, JobMessage};
use std::sync::Arc;

/// Single owner of the UI state. Renderers read `ui` and call methods to change it.
pub struct EguiController {
    pub ui: UiState,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(config: AppConfig, backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            ui: UiState::new(config.schema_url()),
            jobs: ControllerJobs::new(backend),
        }
    }

    /// True while any backend request is outstanding.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.has_pending()
    }

    /// Apply finished background requests. Called once per frame.
    pub fn poll_background_jobs(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::SchemaLoaded(message) => {
                    if !self.jobs.finish_schema_load(message.request_id) {
                        tracing::debug!(request_id = message.request_id, "Dropping stale schema");
                        continue;
                    }
                    self.apply_schema_result(message.result);
                }
                JobMessage::Predicted(message) => {
                    if !self.jobs.finish_prediction(message.request_id) {
                        tracing::debug!(
                            request_id = message.request_id,
                            "Dropping superseded prediction"
                        );
                        continue;
                    }
                    self.apply_prediction_result(message.result);
                }
            }
        }
    }

    /// Set one feature, clamped to its schema range. Unknown names and
    /// non-finite values are ignored.
    pub fn set_feature(&mut self, name: &str, value: f64) {
        if !value.is_finite() {
            return;
        }
        let Some(range) = self.ui.schema.as_ref().and_then(|schema| schema.get(name)) else {
            return;
        };
        let clamped = range.clamp(value);
        self.ui.features.insert(name, clamped);
    }

    pub fn feature_value(&self, name: &str) -> Option<f64> {
        self.ui.features.get(name)
    }

    /// Value as shown in the numeric input.
    pub fn feature_text(&self, name: &str) -> Option<String> {
        self.feature_value(name).map(view_model::format_feature_value)
    }

    /// Update the threshold from a slider percent. Values outside `0..=100` are ignored.
    pub fn set_threshold_percent(&mut self, percent: i64) {
        if !(0..=100).contains(&percent) {
            return;
        }
        self.ui.threshold = percent as f64 / 100.0;
    }

    pub fn threshold_percent(&self) -> i64 {
        view_model::threshold_percent(self.ui.threshold)
    }

    /// Banner outcome for the current prediction and threshold.
    pub fn prediction_outcome(&self) -> Option<PredictionOutcome> {
        view_model::prediction_outcome(self.ui.prediction, self.ui.threshold)
    }

    /// Cancel outstanding requests; their results are discarded.
    pub fn shutdown(&mut self) {
        self.jobs.cancel_all();
        self.ui.loading = false;
        self.ui.connection.connecting = false;
    }
}
