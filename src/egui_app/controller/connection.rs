use super::*;
use crate::backend::{BackendError, Schema};

impl EguiController {
    /// Request the schema. The UI shows the connecting screen until it arrives.
    pub fn connect(&mut self) {
        if self.ui.is_connected() {
            return;
        }
        let request_id = self.jobs.begin_schema_load();
        self.ui.connection.connecting = true;
        tracing::info!(
            request_id,
            url = %self.ui.connection.schema_url,
            "Requesting schema"
        );
    }

    /// Manual reconnect from the connecting screen. Ignored while a request is running.
    pub fn reconnect(&mut self) {
        if self.jobs.schema_load_in_progress() {
            return;
        }
        self.connect();
    }

    pub(super) fn apply_schema_result(&mut self, result: Result<Schema, BackendError>) {
        self.ui.connection.connecting = false;
        match result {
            Ok(schema) => {
                tracing::info!(fields = schema.len(), "Schema loaded");
                self.ui.features = schema.initial_features();
                self.ui.schema = Some(schema);
                self.ui.connection.last_failure = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Schema request failed");
                self.ui.connection.last_failure = Some(err.to_string());
            }
        }
    }
}
