use crate::backend::{BackendError, FeatureVector, PredictionBackend, Schema};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    SchemaLoaded(SchemaLoadResult),
    Predicted(PredictionResult),
}

#[derive(Debug)]
pub(crate) struct SchemaLoadResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<Schema, BackendError>,
}

#[derive(Debug)]
pub(crate) struct PredictionResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<f64, BackendError>,
}

/// An in-flight request. Setting `cancel` makes the worker drop its result.
#[derive(Debug)]
struct PendingRequest {
    request_id: u64,
    cancel: Arc<AtomicBool>,
}

impl PendingRequest {
    fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Runs backend calls on worker threads and funnels results into one channel.
///
/// At most one schema request and one prediction request are pending. Starting
/// a new one cancels its predecessor, and results carrying a stale request id
/// are rejected when they are taken.
pub(crate) struct ControllerJobs {
    backend: Arc<dyn PredictionBackend>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    pub(super) next_request_id: u64,
    pending_schema: Option<PendingRequest>,
    pending_prediction: Option<PendingRequest>,
}

impl ControllerJobs {
    pub(super) fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            backend,
            message_tx,
            message_rx,
            next_request_id: 1,
            pending_schema: None,
            pending_prediction: None,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn has_pending(&self) -> bool {
        self.pending_schema.is_some() || self.pending_prediction.is_some()
    }

    pub(super) fn schema_load_in_progress(&self) -> bool {
        self.pending_schema.is_some()
    }

    pub(super) fn begin_schema_load(&mut self) -> u64 {
        if let Some(previous) = self.pending_schema.take() {
            previous.cancel();
        }
        let (request_id, cancel) = self.next_request();
        self.pending_schema = Some(PendingRequest {
            request_id,
            cancel: cancel.clone(),
        });
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.fetch_schema();
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(JobMessage::SchemaLoaded(SchemaLoadResult { request_id, result }));
        });
        request_id
    }

    /// Clears the pending schema request when `request_id` is the current one.
    pub(super) fn finish_schema_load(&mut self, request_id: u64) -> bool {
        take_if_current(&mut self.pending_schema, request_id)
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.pending_prediction.is_some()
    }

    pub(super) fn begin_prediction(&mut self, features: FeatureVector) -> u64 {
        self.cancel_prediction();
        let (request_id, cancel) = self.next_request();
        self.pending_prediction = Some(PendingRequest {
            request_id,
            cancel: cancel.clone(),
        });
        let backend = Arc::clone(&self.backend);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.predict(&features);
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            let _ = tx.send(JobMessage::Predicted(PredictionResult { request_id, result }));
        });
        request_id
    }

    /// Clears the pending prediction when `request_id` is the current one.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        take_if_current(&mut self.pending_prediction, request_id)
    }

    pub(super) fn cancel_prediction(&mut self) {
        if let Some(previous) = self.pending_prediction.take() {
            previous.cancel();
        }
    }

    pub(super) fn cancel_all(&mut self) {
        self.cancel_prediction();
        if let Some(schema) = self.pending_schema.take() {
            schema.cancel();
        }
    }

    fn next_request(&mut self) -> (u64, Arc<AtomicBool>) {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        (request_id, Arc::new(AtomicBool::new(false)))
    }
}

impl Drop for ControllerJobs {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

fn take_if_current(slot: &mut Option<PendingRequest>, request_id: u64) -> bool {
    if slot
        .as_ref()
        .is_some_and(|pending| pending.request_id == request_id)
    {
        *slot = None;
        return true;
    }
    false
}
