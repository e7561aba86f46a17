use super::*;
use crate::backend::{BackendError, FeatureVector, FieldRange, Schema};
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Backend whose responses are fed by the test, one per call.
///
/// Each call blocks its worker thread until the test sends a reply, so the
/// test controls exactly when a request settles.
pub(super) struct ScriptedBackend {
    schema_rx: Mutex<Receiver<Result<Schema, BackendError>>>,
    predict_rx: Mutex<Receiver<Result<f64, BackendError>>>,
    sent_tx: Mutex<Sender<FeatureVector>>,
}

impl PredictionBackend for ScriptedBackend {
    fn fetch_schema(&self) -> Result<Schema, BackendError> {
        let rx = self.schema_rx.lock().unwrap();
        rx.recv()
            .unwrap_or_else(|_| Err(BackendError::Transport("script closed".into())))
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, BackendError> {
        // Hold the reply lock before announcing the call so replies pair up
        // with calls in the order the test observes them.
        let rx = self.predict_rx.lock().unwrap();
        let _ = self.sent_tx.lock().unwrap().send(features.clone());
        rx.recv()
            .unwrap_or_else(|_| Err(BackendError::Transport("script closed".into())))
    }
}

/// Test-side handles for a [`ScriptedBackend`].
pub(super) struct Script {
    pub(super) schema_tx: Sender<Result<Schema, BackendError>>,
    pub(super) predict_tx: Sender<Result<f64, BackendError>>,
    pub(super) sent_rx: Receiver<FeatureVector>,
}

pub(super) fn scripted_controller() -> (EguiController, Script) {
    let (schema_tx, schema_rx) = mpsc::channel();
    let (predict_tx, predict_rx) = mpsc::channel();
    let (sent_tx, sent_rx) = mpsc::channel();
    let backend = ScriptedBackend {
        schema_rx: Mutex::new(schema_rx),
        predict_rx: Mutex::new(predict_rx),
        sent_tx: Mutex::new(sent_tx),
    };
    let controller = EguiController::new(AppConfig::default(), Arc::new(backend));
    (
        controller,
        Script {
            schema_tx,
            predict_tx,
            sent_rx,
        },
    )
}

pub(super) fn field(min: f64, max: f64, mean: f64) -> FieldRange {
    FieldRange {
        min,
        max,
        mean,
        std: None,
    }
}

pub(super) fn single_field_schema() -> Schema {
    Schema::from_fields([("x", field(0.0, 10.0, 5.0))]).unwrap()
}

/// Controller that already loaded `schema`.
pub(super) fn connected_controller(schema: Schema) -> (EguiController, Script) {
    let (mut controller, script) = scripted_controller();
    controller.connect();
    script.schema_tx.send(Ok(schema)).unwrap();
    wait_until(&mut controller, |c| c.ui.is_connected());
    (controller, script)
}

/// Poll jobs until `done` holds, failing the test after a generous timeout.
pub(super) fn wait_until(controller: &mut EguiController, done: impl Fn(&EguiController) -> bool) {
    for _ in 0..400 {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("controller did not reach the expected state");
}

/// Resolve the in-flight prediction and wait for the controller to apply it.
pub(super) fn settle_prediction(
    controller: &mut EguiController,
    script: &Script,
    result: Result<f64, BackendError>,
) {
    script.predict_tx.send(result).unwrap();
    wait_until(controller, |c| !c.has_pending_jobs());
}
