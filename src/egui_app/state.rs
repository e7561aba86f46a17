//! State read by the egui renderer. Owned and mutated only by the controller.

use crate::backend::{FeatureVector, Schema};

/// Confidence cutoff used until the user moves the slider.
pub const DEFAULT_THRESHOLD: f64 = 0.5;
/// Message shown for any failed prediction request.
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed!";

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    /// `None` until the backend schema has loaded.
    pub schema: Option<Schema>,
    /// One value per schema field, always inside the field's range.
    pub features: FeatureVector,
    /// True while a prediction request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// Last probability returned by the backend, unvalidated.
    pub prediction: Option<f64>,
    /// Confidence cutoff in `[0, 1]`.
    pub threshold: f64,
    pub connection: ConnectionState,
}

impl UiState {
    pub fn new(schema_url: impl Into<String>) -> Self {
        Self {
            schema: None,
            features: FeatureVector::default(),
            loading: false,
            error: None,
            prediction: None,
            threshold: DEFAULT_THRESHOLD,
            connection: ConnectionState {
                schema_url: schema_url.into(),
                connecting: false,
                last_failure: None,
            },
        }
    }

    pub fn is_connected(&self) -> bool {
        self.schema.is_some()
    }
}

/// Backend connection hint shown until the schema loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionState {
    pub schema_url: String,
    /// A schema request is in flight.
    pub connecting: bool,
    /// Detail of the most recent failed schema request.
    pub last_failure: Option<String>,
}

/// What the result banner shows for a valid prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionOutcome {
    Detected,
    NotDetected,
}

impl PredictionOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Detected => "Higgs Boson Detected!",
            Self::NotDetected => "No Boson Detected!",
        }
    }
}
