mod support;

use std::{sync::Arc, time::Duration};

use boson_detector::backend::HttpBackend;
use boson_detector::egui_app::controller::EguiController;
use boson_detector::egui_app::state::PredictionOutcome;
use support::stub_server::{StubServer, unreachable_base_url};
use support::{SINGLE_FIELD_SCHEMA, config_for};

fn controller_for(base_url: &str) -> EguiController {
    let config = config_for(base_url);
    let backend = Arc::new(HttpBackend::new(&config));
    EguiController::new(config, backend)
}

fn wait_for(controller: &mut EguiController, done: impl Fn(&EguiController) -> bool) {
    for _ in 0..1000 {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("controller did not settle");
}

#[test]
fn detection_follows_threshold_end_to_end() {
    let server = StubServer::start();
    server.respond("GET", "/v1/schema", 200, SINGLE_FIELD_SCHEMA);
    server.respond("POST", "/v1/predict", 200, r#"{"prediction": [[0.8]]}"#);
    let mut controller = controller_for(server.base_url());

    controller.connect();
    wait_for(&mut controller, |c| c.ui.is_connected());
    assert_eq!(controller.feature_text("x").as_deref(), Some("5.0000"));

    controller.on_predict_clicked();
    assert!(controller.ui.loading);
    wait_for(&mut controller, |c| !c.ui.loading);
    assert_eq!(
        controller.prediction_outcome().map(PredictionOutcome::message),
        Some("Higgs Boson Detected!")
    );

    controller.set_threshold_percent(90);
    controller.on_predict_clicked();
    wait_for(&mut controller, |c| !c.ui.loading);
    assert_eq!(
        controller.prediction_outcome().map(PredictionOutcome::message),
        Some("No Boson Detected!")
    );
}

#[test]
fn server_error_surfaces_generic_message() {
    let server = StubServer::start();
    server.respond("GET", "/v1/schema", 200, SINGLE_FIELD_SCHEMA);
    server.respond("POST", "/v1/predict", 200, r#"{"prediction": [[0.4]]}"#);
    let mut controller = controller_for(server.base_url());
    controller.connect();
    wait_for(&mut controller, |c| c.ui.is_connected());
    controller.on_predict_clicked();
    wait_for(&mut controller, |c| !c.ui.loading);
    assert_eq!(controller.ui.prediction, Some(0.4));

    server.respond(
        "POST",
        "/v1/predict",
        500,
        r#"{"error": "model exploded"}"#,
    );
    controller.on_predict_clicked();
    wait_for(&mut controller, |c| !c.ui.loading);

    assert_eq!(controller.ui.error.as_deref(), Some("Prediction failed!"));
    assert_eq!(controller.ui.prediction, None);
    assert_eq!(controller.prediction_outcome(), None);
}

#[test]
fn unreachable_backend_stays_on_connecting_screen() {
    let mut controller = controller_for(&unreachable_base_url());
    controller.connect();
    wait_for(&mut controller, |c| !c.has_pending_jobs());

    assert!(!controller.ui.is_connected());
    assert!(controller.ui.connection.last_failure.is_some());
    assert!(!controller.ui.connection.connecting);
}
