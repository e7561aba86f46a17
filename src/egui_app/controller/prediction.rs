use super::*;
use crate::backend::BackendError;

impl EguiController {
    /// Predict button handler. Inert while a request is in flight.
    pub fn on_predict_clicked(&mut self) {
        if self.ui.loading || self.jobs.prediction_in_progress() {
            return;
        }
        self.submit_prediction();
    }

    /// Send the current features, superseding any request still in flight.
    ///
    /// Prediction and error are cleared immediately, before the request settles.
    pub fn submit_prediction(&mut self) {
        if !self.ui.is_connected() {
            return;
        }
        self.ui.loading = true;
        self.ui.prediction = None;
        self.ui.error = None;
        let request_id = self.jobs.begin_prediction(self.ui.features.clone());
        tracing::info!(request_id, "Prediction requested");
    }

    pub(super) fn apply_prediction_result(&mut self, result: Result<f64, BackendError>) {
        self.ui.loading = false;
        match result {
            Ok(value) => {
                tracing::info!(prediction = value, "Prediction received");
                self.ui.prediction = Some(value);
                self.ui.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Prediction request failed");
                self.ui.prediction = None;
                self.ui.error = Some(PREDICTION_FAILED_MESSAGE.to_string());
            }
        }
    }
}
