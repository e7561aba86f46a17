//! Remote classifier backend: schema discovery and single-event prediction.

pub mod api;
pub mod schema;

pub use schema::{FeatureVector, FieldRange, Schema, SchemaField};

use crate::config::AppConfig;
use crate::http_client;

/// Failures talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
    #[error("Malformed prediction: {0}")]
    MalformedPrediction(String),
}

/// Operations the controller needs from the classifier service.
///
/// Implementations are called from worker threads and may block.
pub trait PredictionBackend: Send + Sync {
    /// Describe the input fields the model accepts.
    fn fetch_schema(&self) -> Result<Schema, BackendError>;

    /// Classify one event and return its probability.
    fn predict(&self, features: &FeatureVector) -> Result<f64, BackendError>;
}

/// [`PredictionBackend`] over HTTP using the configured base URL.
pub struct HttpBackend {
    agent: ureq::Agent,
    schema_url: String,
    predict_url: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            agent: http_client::build_agent(&config.http),
            schema_url: config.schema_url(),
            predict_url: config.predict_url(),
        }
    }
}

impl PredictionBackend for HttpBackend {
    fn fetch_schema(&self) -> Result<Schema, BackendError> {
        api::fetch_schema(&self.agent, &self.schema_url)
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, BackendError> {
        api::predict(&self.agent, &self.predict_url, features)
    }
}
