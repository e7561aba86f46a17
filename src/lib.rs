//! Desktop client for a remote Higgs boson classifier.
/// Application directory resolution.
pub mod app_dirs;
/// Schema and prediction client for the classifier service.
pub mod backend;
/// Startup configuration.
pub mod config;
/// egui application: controller, state and renderer.
pub mod egui_app;
mod http_client;
/// Tracing subscriber setup.
pub mod logging;
