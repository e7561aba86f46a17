//! egui front end for the detector.
/// Application controller that owns all UI state.
pub mod controller;
/// State types consumed by the renderer.
pub mod state;
/// egui rendering.
pub mod ui;
/// Display helpers derived from controller state.
pub mod view_model;
