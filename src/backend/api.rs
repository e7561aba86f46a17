//! Blocking client for the two backend endpoints.

use serde::Serialize;
use serde_json::Value;

use super::BackendError;
use super::schema::{FeatureVector, Schema};
use crate::http_client;

const MAX_SCHEMA_RESPONSE_BYTES: usize = 256 * 1024;
const MAX_PREDICT_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_ERROR_DETAIL_CHARS: usize = 300;

#[derive(Serialize)]
struct PredictRequest<'a> {
    events: &'a [FeatureVector],
}

/// `GET {base}/v1/schema`.
pub fn fetch_schema(agent: &ureq::Agent, schema_url: &str) -> Result<Schema, BackendError> {
    let response = agent
        .get(schema_url)
        .set("Accept", "application/json")
        .call();
    let body = read_success_body(response, MAX_SCHEMA_RESPONSE_BYTES)?;
    tracing::debug!(%body, "Schema response");
    parse_schema(&body)
}

/// `POST {base}/v1/predict` with a single event; returns `prediction[0][0]`.
pub fn predict(
    agent: &ureq::Agent,
    predict_url: &str,
    features: &FeatureVector,
) -> Result<f64, BackendError> {
    let request = PredictRequest {
        events: std::slice::from_ref(features),
    };
    let payload =
        serde_json::to_string(&request).map_err(|err| BackendError::Json(err.to_string()))?;
    tracing::debug!(%payload, "Predict request");
    let response = agent
        .post(predict_url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .send_string(&payload);
    let body = read_success_body(response, MAX_PREDICT_RESPONSE_BYTES)?;
    tracing::debug!(%body, "Predict response");
    parse_prediction(&body)
}

fn read_success_body(
    response: Result<ureq::Response, ureq::Error>,
    max_bytes: usize,
) -> Result<String, BackendError> {
    match response {
        Ok(response) => http_client::read_body_limited(response, max_bytes)
            .map_err(|err| BackendError::Body(err.to_string())),
        Err(ureq::Error::Status(code, response)) => {
            let body = http_client::read_body_limited(response, max_bytes)
                .unwrap_or_else(|err| err.to_string());
            Err(BackendError::Status {
                code,
                message: error_detail(&body),
            })
        }
        Err(ureq::Error::Transport(err)) => Err(BackendError::Transport(err.to_string())),
    }
}

pub(crate) fn parse_schema(body: &str) -> Result<Schema, BackendError> {
    serde_json::from_str(body.trim()).map_err(|err| BackendError::InvalidSchema(err.to_string()))
}

pub(crate) fn parse_prediction(body: &str) -> Result<f64, BackendError> {
    let value: Value =
        serde_json::from_str(body.trim()).map_err(|err| BackendError::Json(err.to_string()))?;
    value
        .get("prediction")
        .and_then(|rows| rows.get(0))
        .and_then(|row| row.get(0))
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            BackendError::MalformedPrediction(format!(
                "expected prediction[0][0] to be a number in {}",
                truncate_chars(&value.to_string(), MAX_ERROR_DETAIL_CHARS)
            ))
        })
}

/// Prefer the backend's `{"error": "..."}` message, else the raw body.
pub(crate) fn error_detail(body: &str) -> String {
    let trimmed = body.trim();
    let message = serde_json::from_str::<Value>(trimmed)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| trimmed.to_string());
    truncate_chars(&message, MAX_ERROR_DETAIL_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}…", &text[..index]),
        None => text.to_string(),
    }
}
